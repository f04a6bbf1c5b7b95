//! Hierarchical path handling.
//!
//! This module provides the pipeline turning raw strings into [`Path`]
//! values, and the algebra composing them.
//!
//! # Pipeline
//!
//! 1. **Validation** rejects strings containing a disallowed character.
//! 2. **Normalization** produces the canonical string: no `.` or `..`
//!    elements, no repeated separators, no trailing separator except for
//!    the root `"/"`.
//! 3. **Tokenization** splits the canonical string into segments.
//!
//! A `..` that has nothing left to cancel is an error in absolute and
//! relative paths alike. The one exception is
//! [`Path::parse_relative_with`], which keeps a leading run of `..` in a
//! relative operand so that the output of [`Path::form_relative_path`]
//! reads back.
//!
//! # Examples
//!
//! ```
//! use compath::path::normalize::normalize;
//! use compath::ComponentPath;
//!
//! assert_eq!(normalize("/a/b/../../c").unwrap(), "/c");
//!
//! let from = ComponentPath::parse("/model/jointset/hip").unwrap();
//! let to = ComponentPath::parse("/model/bodyset/pelvis").unwrap();
//!
//! let relative = from.form_relative_path(&to).unwrap();
//! assert_eq!(relative.to_string(), "../../bodyset/pelvis");
//! assert_eq!(from.form_absolute_path(&relative).unwrap(), to);
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use compath::ComponentPath;
//! use compath::path::PathRelationship;
//!
//! let parent = ComponentPath::parse("/model").unwrap();
//! let child = ComponentPath::parse("/model/bodyset").unwrap();
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

mod algebra;
pub mod normalize;
pub mod relationship;
pub mod tokenize;
mod types;
pub mod validity;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use types::{ComponentPath, Path};

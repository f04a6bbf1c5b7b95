#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # compath
//!
//! A library for naming nodes of a tree with slash-delimited paths.
//!
//! This library validates and normalizes raw path strings, and provides the
//! path algebra (absolute and relative forms, parent, leaf name) that
//! tree-resolution code builds on. It never looks up nodes itself.
//!
//! ## Core Types
//!
//! - [`Path`] and [`ComponentPath`]: Immutable normalized paths
//! - [`Flavor`], [`ComponentFlavor`] and [`CustomFlavor`]: Separator and
//!   disallowed-character sets
//! - [`PathRelationship`]: Ancestor/descendant classification
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use compath::ComponentPath;
//!
//! let path = ComponentPath::parse("/model/./jointset//hip/").unwrap();
//! assert_eq!(path.to_string(), "/model/jointset/hip");
//! assert_eq!(path.component_name(), "hip");
//! assert_eq!(path.parent_path().to_string(), "/model/jointset");
//!
//! let base = ComponentPath::parse("/model/bodyset/pelvis").unwrap();
//! let relative = base.form_relative_path(&path).unwrap();
//! assert_eq!(relative.to_string(), "../../jointset/hip");
//! ```

pub mod config;
pub mod error;
pub mod flavor;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, FlavorConfig};
pub use error::{Error, Result};
pub use flavor::{ComponentFlavor, CustomFlavor, Flavor, StatelessFlavor};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::normalize::{normalize, normalize_with};
pub use path::validity::{validate, validate_with};
pub use path::{ComponentPath, Path, PathRelationship};

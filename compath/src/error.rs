//! Error types for the compath library.
//!
//! This module provides the error hierarchy for path parsing, path algebra
//! and flavor configuration, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a compath error.
///
/// # Examples
///
/// ```
/// use compath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the compath library.
///
/// Path syntax errors are deterministic: the same input always fails the
/// same way, so none of these are worth retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw path contains a character outside the allowed set.
    #[error("invalid character {character:?} in path '{path}'")]
    InvalidCharacter {
        /// The offending path (or segment).
        path: String,
        /// The first disallowed character found.
        character: char,
    },

    /// A `..` element would ascend past the first available segment.
    #[error("path '{path}' ascends above the root")]
    AboveRoot {
        /// The path that could not be resolved.
        path: String,
    },

    /// A level index was beyond the number of segments.
    #[error("level index {index} out of range for path with {levels} level(s)")]
    IndexOutOfRange {
        /// The requested level.
        index: usize,
        /// The number of levels in the path.
        levels: usize,
    },

    /// An operation that needs an absolute path was given a relative one.
    #[error("path '{path}' is not absolute")]
    NotAbsolute {
        /// The relative path that was supplied.
        path: String,
    },

    /// Two paths of different flavors were combined.
    #[error("paths '{base}' and '{other}' have different flavors")]
    FlavorMismatch {
        /// The path the operation was called on.
        base: String,
        /// The path passed as the operand.
        other: String,
    },

    /// A segment handed to the segment-level constructor is malformed.
    #[error("invalid segment '{segment}': {reason}")]
    InvalidSegment {
        /// The rejected segment.
        segment: String,
        /// Why the segment was rejected.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error reports a disallowed character.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::Error;
    ///
    /// let err = Error::InvalidCharacter { path: "a b".into(), character: ' ' };
    /// assert!(err.is_invalid_character());
    /// ```
    #[must_use]
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. })
    }

    /// Check if error reports an ascent past the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::Error;
    ///
    /// let err = Error::AboveRoot { path: "/..".into() };
    /// assert!(err.is_above_root());
    /// ```
    #[must_use]
    pub fn is_above_root(&self) -> bool {
        matches!(self, Self::AboveRoot { .. })
    }

    /// Check if error reports an out-of-range level index.
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if error comes from path syntax or path algebra rather than
    /// configuration or I/O.
    #[must_use]
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter { .. }
                | Self::AboveRoot { .. }
                | Self::IndexOutOfRange { .. }
                | Self::NotAbsolute { .. }
                | Self::FlavorMismatch { .. }
                | Self::InvalidSegment { .. }
        )
    }
}

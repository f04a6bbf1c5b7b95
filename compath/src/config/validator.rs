//! Configuration validation.
//!
//! Structural rules shared with [`CustomFlavor::new`](crate::CustomFlavor::new)
//! (the separator is not `.` and is not itself disallowed) are checked
//! there; this module adds the rules that only make sense for a file.

use crate::config::schema::FlavorConfig;
use crate::error::{Error, Result};

/// Validates flavor configuration.
///
/// # Examples
///
/// ```
/// use compath::config::{ConfigValidator, FlavorConfig};
///
/// let config = FlavorConfig::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a flavor configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &FlavorConfig) -> Result<()> {
        if let Some(ref name) = config.name {
            Self::validate_name(name)?;
        }

        Self::validate_separator(config.separator)?;

        Ok(())
    }

    /// Validate the flavor name.
    ///
    /// Names must be non-empty and consist of ASCII alphanumerics, `-` and
    /// `_`.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Validation {
                field: "name".into(),
                message: "Name cannot be empty".into(),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::Validation {
                field: "name".into(),
                message: format!("Name '{name}' may only contain letters, digits, '-' and '_'"),
            });
        }

        Ok(())
    }

    /// Whitespace and control characters cannot delimit segments.
    fn validate_separator(separator: char) -> Result<()> {
        if separator.is_whitespace() || separator.is_control() {
            return Err(Error::Validation {
                field: "separator".into(),
                message: format!("Separator {separator:?} must be a visible character"),
            });
        }

        Ok(())
    }
}

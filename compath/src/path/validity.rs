//! Raw path validation.
//!
//! Validation is the first step of every parse: a raw string containing a
//! disallowed character is rejected before any normalization work happens,
//! so no partially-built path is ever observed.

use crate::error::{Error, Result};
use crate::flavor::{ComponentFlavor, Flavor};

/// Check a raw component path for disallowed characters.
///
/// The separator itself is allowed here; it only delimits segments.
///
/// # Examples
///
/// ```
/// use compath::path::validity::validate;
///
/// assert!(validate("/model/bodies/pelvis"));
/// assert!(!validate("/model/bodies/left pelvis"));
/// assert!(!validate("a\\b"));
/// ```
#[must_use]
pub fn validate(raw: &str) -> bool {
    validate_with(raw, &ComponentFlavor)
}

/// Check a raw path for characters disallowed by `flavor`.
#[must_use]
pub fn validate_with<F: Flavor>(raw: &str, flavor: &F) -> bool {
    flavor.is_valid(raw)
}

/// Like [`validate_with`], but reports the offending character.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] naming the first disallowed character.
pub(crate) fn check_valid<F: Flavor>(raw: &str, flavor: &F) -> Result<()> {
    match flavor.first_invalid(raw) {
        Some(character) => Err(Error::InvalidCharacter {
            path: raw.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

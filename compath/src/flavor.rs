//! Path flavors.
//!
//! A flavor is the immutable configuration a path type is parameterized by:
//! the separator character and the set of characters a raw path may not
//! contain. [`ComponentFlavor`] is the built-in flavor for component paths;
//! [`CustomFlavor`] carries the same information as runtime values, usually
//! loaded from a flavor file (see [`crate::config`]).

use std::fmt;

use crate::error::{Error, Result};

/// Separator and disallowed-character set of a path flavor.
///
/// # Examples
///
/// ```
/// use compath::{ComponentFlavor, Flavor};
///
/// let flavor = ComponentFlavor;
/// assert_eq!(flavor.separator(), '/');
/// assert!(flavor.is_valid("/model/body"));
/// assert!(!flavor.is_valid("/model/my body"));
/// ```
pub trait Flavor: Clone + fmt::Debug + PartialEq {
    /// The character delimiting segments.
    fn separator(&self) -> char;

    /// Characters a raw path string may not contain.
    ///
    /// The separator is never part of this set: a raw path is delimited by
    /// it. Individual segments reject the separator separately.
    fn invalid_chars(&self) -> &[char];

    /// Returns the first disallowed character in `raw`, if any.
    fn first_invalid(&self, raw: &str) -> Option<char> {
        let invalid = self.invalid_chars();
        raw.chars().find(|c| invalid.contains(c))
    }

    /// Returns `true` if `raw` contains no disallowed character.
    fn is_valid(&self, raw: &str) -> bool {
        self.first_invalid(raw).is_none()
    }
}

/// A flavor with exactly one value, so a path's text alone determines it.
///
/// Paths of these flavors implement `Deserialize`. A [`CustomFlavor`] path
/// is read with [`Path::deserialize_with`](crate::Path::deserialize_with)
/// instead, since its text does not say which separator it uses.
///
/// ```compile_fail
/// use compath::{CustomFlavor, Path};
///
/// let _path: Path<CustomFlavor> = serde_json::from_str("\"/a\"").unwrap();
/// ```
pub trait StatelessFlavor: Flavor + Default {}

/// The flavor of model component paths: `/`-separated, and no backslash,
/// `*`, `+`, space, tab or newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComponentFlavor;

impl ComponentFlavor {
    /// Segment separator.
    pub const SEPARATOR: char = '/';

    /// Characters rejected anywhere in a raw component path.
    pub const INVALID_CHARS: [char; 6] = ['\\', '*', '+', ' ', '\t', '\n'];
}

impl StatelessFlavor for ComponentFlavor {}

impl Flavor for ComponentFlavor {
    fn separator(&self) -> char {
        Self::SEPARATOR
    }

    fn invalid_chars(&self) -> &[char] {
        &Self::INVALID_CHARS
    }
}

/// A flavor defined at runtime.
///
/// # Examples
///
/// ```
/// use compath::{CustomFlavor, Flavor};
///
/// let flavor = CustomFlavor::new(':', vec!['#']).unwrap();
/// assert_eq!(flavor.separator(), ':');
/// assert!(!flavor.is_valid("a:#b"));
///
/// // '.' would make every element look like a relative step
/// assert!(CustomFlavor::new('.', vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomFlavor {
    separator: char,
    invalid_chars: Vec<char>,
}

impl CustomFlavor {
    /// Create a flavor from a separator and a disallowed-character set.
    ///
    /// Duplicate characters are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the separator is `.`, if the
    /// separator is also listed as invalid, or if `.` is listed as invalid
    /// (relative elements could no longer be written).
    pub fn new(separator: char, mut invalid_chars: Vec<char>) -> Result<Self> {
        if separator == '.' {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "separator must not be '.'".into(),
            });
        }
        if invalid_chars.contains(&separator) {
            return Err(Error::Validation {
                field: "invalid_chars".into(),
                message: format!("separator {separator:?} cannot also be an invalid character"),
            });
        }
        if invalid_chars.contains(&'.') {
            return Err(Error::Validation {
                field: "invalid_chars".into(),
                message: "'.' cannot be an invalid character".into(),
            });
        }

        invalid_chars.sort_unstable();
        invalid_chars.dedup();

        Ok(Self {
            separator,
            invalid_chars,
        })
    }

    /// The runtime equivalent of [`ComponentFlavor`].
    #[must_use]
    pub fn component() -> Self {
        Self::from(ComponentFlavor)
    }
}

impl Default for CustomFlavor {
    fn default() -> Self {
        Self::component()
    }
}

impl From<ComponentFlavor> for CustomFlavor {
    fn from(flavor: ComponentFlavor) -> Self {
        let mut invalid_chars = flavor.invalid_chars().to_vec();
        invalid_chars.sort_unstable();
        Self {
            separator: flavor.separator(),
            invalid_chars,
        }
    }
}

impl Flavor for CustomFlavor {
    fn separator(&self) -> char {
        self.separator
    }

    fn invalid_chars(&self) -> &[char] {
        &self.invalid_chars
    }
}

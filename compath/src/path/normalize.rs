//! Path normalization functions.
//!
//! This module turns an arbitrary separator-delimited string into its
//! canonical form by:
//! - Rejecting disallowed characters up front
//! - Collapsing repeated separators
//! - Resolving `.` and `..` elements
//! - Dropping a trailing separator (the root `"/"` keeps its only one)
//!
//! Resolution splits the string into elements and runs them through a stack,
//! so an element removal never shifts the rest of the buffer.

use crate::error::{Error, Result};
use crate::flavor::{ComponentFlavor, Flavor};

use super::validity::check_valid;

/// The element naming the current level.
pub const CURRENT: &str = ".";

/// The element naming the parent level.
pub const PARENT: &str = "..";

/// A `..` had no resolved element left to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AscendsAboveRoot;

/// Resolve `elements` onto the already-resolved stack.
///
/// Empty elements and `.` are skipped, `..` pops the top of the stack and
/// anything else is pushed. Fails if a `..` finds the stack empty, whether
/// the stack stands for an absolute root or for an empty relative context.
pub(crate) fn resolve_into<S, I>(
    resolved: &mut Vec<S>,
    elements: I,
) -> std::result::Result<(), AscendsAboveRoot>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    for element in elements {
        let name = element.as_ref();
        if name == PARENT {
            if resolved.pop().is_none() {
                return Err(AscendsAboveRoot);
            }
        } else if !name.is_empty() && name != CURRENT {
            resolved.push(element);
        }
    }
    Ok(())
}

/// Join segments with `separator`, prefixed by it iff `absolute`.
pub(crate) fn join_segments<S: AsRef<str>>(
    segments: &[S],
    absolute: bool,
    separator: char,
) -> String {
    let len = segments.iter().map(|s| s.as_ref().len() + 1).sum::<usize>();
    let mut out = String::with_capacity(len + 1);
    if absolute {
        out.push(separator);
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Normalize a raw component path to canonical form.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains a disallowed character ([`Error::InvalidCharacter`])
/// - A `..` element has nothing left to ascend past ([`Error::AboveRoot`])
///
/// # Examples
///
/// ```
/// use compath::path::normalize::normalize;
///
/// assert_eq!(normalize("a/./b").unwrap(), "a/b");
/// assert_eq!(normalize("a//b").unwrap(), "a/b");
/// assert_eq!(normalize("/a/b/../../c").unwrap(), "/c");
/// assert_eq!(normalize("/").unwrap(), "/");
///
/// assert!(normalize("..").unwrap_err().is_above_root());
/// assert!(normalize("a b").unwrap_err().is_invalid_character());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    normalize_with(raw, &ComponentFlavor)
}

/// Normalize a raw path of any flavor to canonical form.
///
/// # Errors
///
/// Same as [`normalize`], with the flavor's separator and disallowed set.
///
/// # Examples
///
/// ```
/// use compath::CustomFlavor;
/// use compath::path::normalize::normalize_with;
///
/// let flavor = CustomFlavor::new(':', vec![]).unwrap();
/// assert_eq!(normalize_with("::a:.:b:..:c:", &flavor).unwrap(), ":a:c");
/// ```
pub fn normalize_with<F: Flavor>(raw: &str, flavor: &F) -> Result<String> {
    check_valid(raw, flavor)?;

    let separator = flavor.separator();
    let absolute = raw.starts_with(separator);

    let mut resolved: Vec<&str> = Vec::new();
    resolve_into(&mut resolved, raw.split(separator)).map_err(|AscendsAboveRoot| {
        Error::AboveRoot {
            path: raw.to_string(),
        }
    })?;

    Ok(join_segments(&resolved, absolute, separator))
}

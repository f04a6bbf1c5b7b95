//! Splitting canonical path strings into segments.

use crate::flavor::{ComponentFlavor, Flavor};

/// Split a canonical component path into its segments.
///
/// Returns the segments, front closest to the root, and whether the string
/// began with the separator. The input is expected to come out of
/// [`normalize`](super::normalize::normalize); raw user input must not be
/// handed here directly.
///
/// # Examples
///
/// ```
/// use compath::path::tokenize::tokenize;
///
/// assert_eq!(tokenize("/a/b"), (vec!["a".to_string(), "b".to_string()], true));
/// assert_eq!(tokenize("/"), (vec![], true));
/// assert_eq!(tokenize(""), (vec![], false));
/// ```
#[must_use]
pub fn tokenize(canonical: &str) -> (Vec<String>, bool) {
    tokenize_with(canonical, &ComponentFlavor)
}

/// Split a canonical path of any flavor into its segments.
#[must_use]
pub fn tokenize_with<F: Flavor>(canonical: &str, flavor: &F) -> (Vec<String>, bool) {
    let separator = flavor.separator();
    let absolute = canonical.starts_with(separator);
    let segments = canonical
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();
    (segments, absolute)
}

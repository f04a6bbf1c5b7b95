//! Core path value type.
//!
//! A [`Path`] is an immutable, ordered list of segments plus an absolute
//! flag, parameterized by the [`Flavor`] it was parsed with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::flavor::{ComponentFlavor, Flavor, StatelessFlavor};

use super::normalize::{
    join_segments, normalize_with, resolve_into, AscendsAboveRoot, CURRENT, PARENT,
};
use super::tokenize::tokenize_with;
use super::validity::check_valid;

/// A normalized hierarchical path.
///
/// Paths never contain `.` segments, repeated separators or a trailing
/// separator. Relative paths built by [`Path::form_relative_path`] or read
/// by [`Path::parse_relative_with`] may start with a run of `..` segments;
/// no other `..` survives parsing.
///
/// # Examples
///
/// ```
/// use compath::ComponentPath;
///
/// let path: ComponentPath = "/model//bodies/./pelvis/".parse().unwrap();
/// assert!(path.is_absolute());
/// assert_eq!(path.num_levels(), 3);
/// assert_eq!(path.to_string(), "/model/bodies/pelvis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<F: Flavor = ComponentFlavor> {
    segments: Vec<String>,
    absolute: bool,
    flavor: F,
}

/// Path of a component inside a model tree.
pub type ComponentPath = Path<ComponentFlavor>;

impl<F: Flavor> Path<F> {
    /// Parse a raw string with an explicit flavor.
    ///
    /// The string is validated, normalized and split into segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] or [`Error::AboveRoot`] as
    /// [`normalize`](super::normalize::normalize) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::{CustomFlavor, Path};
    ///
    /// let flavor = CustomFlavor::new(':', vec![]).unwrap();
    /// let path = Path::parse_with(":a:b", flavor).unwrap();
    /// assert_eq!(path.segments(), ["a", "b"]);
    /// ```
    pub fn parse_with(raw: &str, flavor: F) -> Result<Self> {
        let canonical = normalize_with(raw, &flavor)?;
        let (segments, absolute) = tokenize_with(&canonical, &flavor);
        Ok(Self::from_trusted(segments, absolute, flavor))
    }

    /// Parse a path operand that may start above its base.
    ///
    /// Relative input may begin with a run of `..` elements, the shape
    /// [`Path::form_relative_path`] produces, so its string form reads back
    /// here. Every later `..` must cancel a segment. Absolute input is
    /// parsed as by [`Path::parse_with`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] for a disallowed character and
    /// [`Error::AboveRoot`] for a `..` after the leading run with nothing
    /// left to cancel.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// let from = ComponentPath::parse("/a/b/c").unwrap();
    /// let to = ComponentPath::parse("/a/d").unwrap();
    /// let text = from.form_relative_path(&to).unwrap().to_string();
    /// assert_eq!(text, "../../d");
    ///
    /// let relative = ComponentPath::parse_relative(&text).unwrap();
    /// assert_eq!(from.form_absolute_path(&relative).unwrap(), to);
    ///
    /// assert!(ComponentPath::parse_relative("a/../..").unwrap_err().is_above_root());
    /// ```
    pub fn parse_relative_with(raw: &str, flavor: F) -> Result<Self> {
        let separator = flavor.separator();
        if raw.starts_with(separator) {
            return Self::parse_with(raw, flavor);
        }
        check_valid(raw, &flavor)?;

        let mut elements = raw
            .split(separator)
            .filter(|element| !element.is_empty() && *element != CURRENT)
            .peekable();
        let mut segments = Vec::new();
        while elements.next_if_eq(&PARENT).is_some() {
            segments.push(PARENT.to_string());
        }

        let mut rest: Vec<&str> = Vec::new();
        resolve_into(&mut rest, elements).map_err(|AscendsAboveRoot| Error::AboveRoot {
            path: raw.to_string(),
        })?;
        segments.extend(rest.into_iter().map(str::to_string));

        Ok(Self::from_trusted(segments, false, flavor))
    }

    /// Deserialize a path string with an explicit flavor.
    ///
    /// The string is read with [`Path::parse_relative_with`], so every
    /// [`Display`](fmt::Display) form deserializes back to the same path.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error, or a custom error wrapping the
    /// parse failure.
    pub fn deserialize_with<'de, D: Deserializer<'de>>(
        deserializer: D,
        flavor: F,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_relative_with(&raw, flavor).map_err(serde::de::Error::custom)
    }

    /// Build a path from a segment sequence, validating every segment.
    ///
    /// Segments must be non-empty, free of the separator and of disallowed
    /// characters, and must not be `.`. A `..` segment is only accepted in a
    /// leading run of a relative path, the shape produced by
    /// [`Path::form_relative_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] for a separator or disallowed
    /// character inside a segment and [`Error::InvalidSegment`] for empty or
    /// misplaced relative segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::{ComponentFlavor, Path};
    ///
    /// let path = Path::try_from_segments(["..", "d"], false, ComponentFlavor).unwrap();
    /// assert_eq!(path.to_string(), "../d");
    ///
    /// assert!(Path::try_from_segments(["a/b"], true, ComponentFlavor).is_err());
    /// assert!(Path::try_from_segments(["a", ".."], true, ComponentFlavor).is_err());
    /// ```
    pub fn try_from_segments<I, S>(segments: I, absolute: bool, flavor: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let separator = flavor.separator();
        let mut ascending = !absolute;
        let mut checked = Vec::new();

        for segment in segments {
            let segment = segment.into();
            if segment.is_empty() {
                return Err(Error::InvalidSegment {
                    segment,
                    reason: "segments must not be empty".into(),
                });
            }
            if segment.contains(separator) {
                return Err(Error::InvalidCharacter {
                    path: segment,
                    character: separator,
                });
            }
            if let Some(character) = flavor.first_invalid(&segment) {
                return Err(Error::InvalidCharacter {
                    path: segment,
                    character,
                });
            }
            if segment == CURRENT {
                return Err(Error::InvalidSegment {
                    segment,
                    reason: "'.' segments are not allowed".into(),
                });
            }
            if segment != PARENT {
                ascending = false;
            } else if !ascending {
                return Err(Error::InvalidSegment {
                    segment,
                    reason: "'..' is only allowed at the start of a relative path".into(),
                });
            }
            checked.push(segment);
        }

        Ok(Self::from_trusted(checked, absolute, flavor))
    }

    /// Build a path from segments already known to satisfy the invariants.
    pub(crate) fn from_trusted(segments: Vec<String>, absolute: bool, flavor: F) -> Self {
        Self {
            segments,
            absolute,
            flavor,
        }
    }

    /// The root path (absolute, zero segments) of a flavor.
    #[must_use]
    pub fn root_with(flavor: F) -> Self {
        Self::from_trusted(Vec::new(), true, flavor)
    }

    /// The empty relative path of a flavor, denoting "self".
    #[must_use]
    pub fn empty_with(flavor: F) -> Self {
        Self::from_trusted(Vec::new(), false, flavor)
    }

    /// Whether the path starts at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.absolute && self.segments.is_empty()
    }

    /// Whether the path has no segments (root or "self").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn num_levels(&self) -> usize {
        self.segments.len()
    }

    /// The segments, front closest to the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The flavor this path was built with.
    #[must_use]
    pub fn flavor(&self) -> &F {
        &self.flavor
    }

    /// Consume the path, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

impl<F: Flavor + Default> Path<F> {
    /// Parse a raw string with the flavor's default value.
    ///
    /// # Errors
    ///
    /// See [`Path::parse_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// assert!(ComponentPath::parse("/a/b").is_ok());
    /// assert!(ComponentPath::parse("/a/../..").unwrap_err().is_above_root());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, F::default())
    }

    /// Parse a path operand with the flavor's default value.
    ///
    /// # Errors
    ///
    /// See [`Path::parse_relative_with`].
    pub fn parse_relative(raw: &str) -> Result<Self> {
        Self::parse_relative_with(raw, F::default())
    }

    /// The root path.
    #[must_use]
    pub fn root() -> Self {
        Self::root_with(F::default())
    }

    /// The empty relative path.
    #[must_use]
    pub fn empty() -> Self {
        Self::empty_with(F::default())
    }

    /// Build a path from validated segments with the default flavor.
    ///
    /// # Errors
    ///
    /// See [`Path::try_from_segments`].
    pub fn from_segments<I, S>(segments: I, absolute: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_from_segments(segments, absolute, F::default())
    }
}

impl<F: Flavor + Default> Default for Path<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flavor> fmt::Display for Path<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_segments(
            &self.segments,
            self.absolute,
            self.flavor.separator(),
        ))
    }
}

impl<F: Flavor + Default> FromStr for Path<F> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<F: Flavor> Serialize for Path<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, F: StatelessFlavor> Deserialize<'de> for Path<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Self::deserialize_with(deserializer, F::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::CustomFlavor;

    #[test]
    fn test_parse_absolute() {
        let path = ComponentPath::parse("/a/b/c").unwrap();
        assert!(path.is_absolute());
        assert!(!path.is_root());
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.num_levels(), 3);
    }

    #[test]
    fn test_parse_normalizes() {
        let path = ComponentPath::parse("./a//b/../c/").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), ["a", "c"]);
        assert_eq!(path.to_string(), "a/c");
    }

    #[test]
    fn test_parse_root_and_empty() {
        let root = ComponentPath::parse("/").unwrap();
        assert!(root.is_root());
        assert_eq!(root, ComponentPath::root());
        assert_eq!(root.to_string(), "/");

        let empty = ComponentPath::parse("").unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_absolute());
        assert_eq!(empty, ComponentPath::empty());
        assert_eq!(ComponentPath::parse(".").unwrap(), empty);
        assert_eq!(empty.to_string(), "");
        assert_eq!(ComponentPath::default(), empty);
    }

    #[test]
    fn test_parse_errors_produce_no_path() {
        assert!(ComponentPath::parse("a+b").unwrap_err().is_invalid_character());
        assert!(ComponentPath::parse("../a").unwrap_err().is_above_root());
        assert!(ComponentPath::parse("/..").unwrap_err().is_above_root());
    }

    #[test]
    fn test_from_str() {
        let path: ComponentPath = "/x/y".parse().unwrap();
        assert_eq!(path.to_string(), "/x/y");
    }

    #[test]
    fn test_try_from_segments_accepts_valid() {
        let path = ComponentPath::from_segments(["a", "b"], true).unwrap();
        assert_eq!(path, ComponentPath::parse("/a/b").unwrap());
    }

    #[test]
    fn test_try_from_segments_leading_parent_run() {
        let path = ComponentPath::from_segments(["..", "..", "x"], false).unwrap();
        assert_eq!(path.to_string(), "../../x");
    }

    #[test]
    fn test_try_from_segments_rejects_separator() {
        let err = ComponentPath::from_segments(["a/b"], true).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCharacter { character: '/', .. }
        ));
    }

    #[test]
    fn test_try_from_segments_rejects_invalid_char() {
        let err = ComponentPath::from_segments(["a b"], false).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCharacter { character: ' ', .. }
        ));
    }

    #[test]
    fn test_try_from_segments_rejects_relative_misuse() {
        for (segments, absolute) in [
            (vec!["."], false),
            (vec![""], false),
            (vec![".."], true),
            (vec!["a", ".."], false),
            (vec!["..", "a", ".."], false),
        ] {
            let err = ComponentPath::from_segments(segments.clone(), absolute).unwrap_err();
            assert!(
                matches!(err, Error::InvalidSegment { .. }),
                "{segments:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_custom_flavor_display() {
        let flavor = CustomFlavor::new(':', vec![]).unwrap();
        let path = Path::parse_with("::a:b:", flavor.clone()).unwrap();
        assert_eq!(path.to_string(), ":a:b");
        assert_eq!(path.flavor(), &flavor);
    }

    #[test]
    fn test_serde_round_trip() {
        let path = ComponentPath::parse("/model/bodies/pelvis").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"/model/bodies/pelvis\"");

        let back: ComponentPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_deserialize_normalizes_and_validates() {
        let path: ComponentPath = serde_json::from_str("\"/a/./b//\"").unwrap();
        assert_eq!(path.to_string(), "/a/b");

        assert!(serde_json::from_str::<ComponentPath>("\"/a b\"").is_err());
        assert!(serde_json::from_str::<ComponentPath>("\"/..\"").is_err());
    }

    #[test]
    fn test_serde_round_trip_of_relative_results() {
        let from = ComponentPath::parse("/a/b/c").unwrap();
        for target in ["/a/b/d", "/x", "/", "/a/b/c/e"] {
            let relative = from
                .form_relative_path(&ComponentPath::parse(target).unwrap())
                .unwrap();
            let json = serde_json::to_string(&relative).unwrap();
            let back: ComponentPath = serde_json::from_str(&json).unwrap();
            assert_eq!(back, relative, "{json}");
        }
    }

    #[test]
    fn test_parse_relative_leading_parent_run() {
        let path = ComponentPath::parse_relative("./../..//x/./y/../z").unwrap();
        assert_eq!(path.segments(), ["..", "..", "x", "z"]);
        assert!(!path.is_absolute());
        assert_eq!(path.to_string(), "../../x/z");

        let absolute = ComponentPath::parse_relative("/a/../b").unwrap();
        assert_eq!(absolute, ComponentPath::parse("/b").unwrap());
    }

    #[test]
    fn test_parse_relative_rejects_inner_ascent() {
        assert!(ComponentPath::parse_relative("a/../..")
            .unwrap_err()
            .is_above_root());
        assert!(ComponentPath::parse_relative("../a/../..")
            .unwrap_err()
            .is_above_root());
        assert!(ComponentPath::parse_relative("/..").unwrap_err().is_above_root());
        assert!(ComponentPath::parse_relative("../a b")
            .unwrap_err()
            .is_invalid_character());
    }

    #[test]
    fn test_deserialize_with_custom_flavor() {
        let colon = CustomFlavor::new(':', vec![]).unwrap();
        let path = Path::parse_with(":a:b", colon.clone()).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\":a:b\"");

        let mut de = serde_json::Deserializer::from_str(&json);
        let back = Path::deserialize_with(&mut de, colon).unwrap();
        assert_eq!(back, path);
        assert!(back.is_absolute());
        assert_eq!(back.segments(), ["a", "b"]);
    }

    #[test]
    fn test_into_segments() {
        let path = ComponentPath::parse("a/b").unwrap();
        assert_eq!(path.into_segments(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_paths_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComponentPath>();
        assert_send_sync::<Path<CustomFlavor>>();
    }
}

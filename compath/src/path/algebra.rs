//! Path algebra.
//!
//! Composition and decomposition of [`Path`] values. Every operation works on
//! segment lists; nothing here re-parses a string.

use std::iter;

use crate::error::{Error, Result};
use crate::flavor::Flavor;

use super::normalize::{join_segments, resolve_into, AscendsAboveRoot, PARENT};
use super::types::Path;

impl<F: Flavor> Path<F> {
    /// Resolve `other` against this absolute base path.
    ///
    /// An absolute `other` is returned as is. A relative one is appended to
    /// the base segments, with `..` popping a segment and `.` skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolute`] if `self` is relative,
    /// [`Error::FlavorMismatch`] if the two paths have different flavors and
    /// [`Error::AboveRoot`] if `other` ascends past the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// let base = ComponentPath::parse("/a/b").unwrap();
    /// let other = ComponentPath::from_segments(["..", "c"], false).unwrap();
    /// assert_eq!(base.form_absolute_path(&other).unwrap().to_string(), "/a/c");
    /// ```
    pub fn form_absolute_path(&self, other: &Self) -> Result<Self> {
        self.require_absolute()?;
        self.require_same_flavor(other)?;

        if other.is_absolute() {
            return Ok(other.clone());
        }

        let mut resolved = self.segments().to_vec();
        resolve_into(&mut resolved, other.segments().iter().cloned()).map_err(
            |AscendsAboveRoot| Error::AboveRoot {
                path: self.joined_with(other),
            },
        )?;

        Ok(Self::from_trusted(resolved, true, self.flavor().clone()))
    }

    /// The relative path leading from this absolute path to `to`.
    ///
    /// After the longest common prefix, every remaining segment of `self`
    /// becomes a `..` and the remaining segments of `to` follow. Equal paths
    /// give the empty relative path, whose string form is `""`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolute`] if either path is relative and
    /// [`Error::FlavorMismatch`] if they have different flavors.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// let from = ComponentPath::parse("/a/b/c").unwrap();
    /// let to = ComponentPath::parse("/a/b/d").unwrap();
    /// let rel = from.form_relative_path(&to).unwrap();
    /// assert_eq!(rel.segments(), ["..", "d"]);
    /// assert_eq!(rel.to_string(), "../d");
    /// ```
    pub fn form_relative_path(&self, to: &Self) -> Result<Self> {
        self.require_absolute()?;
        to.require_absolute()?;
        self.require_same_flavor(to)?;

        let from = self.segments();
        let target = to.segments();
        let common = from
            .iter()
            .zip(target)
            .take_while(|(a, b)| a == b)
            .count();

        let ascents = from.len() - common;
        let mut segments = Vec::with_capacity(ascents + target.len() - common);
        segments.extend(iter::repeat_with(|| PARENT.to_string()).take(ascents));
        segments.extend(target[common..].iter().cloned());

        Ok(Self::from_trusted(segments, false, self.flavor().clone()))
    }

    /// The path without its last segment.
    ///
    /// A path with no segments is its own parent: the root stays the root
    /// and the empty relative path stays empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// let path = ComponentPath::parse("/a/b/c").unwrap();
    /// assert_eq!(path.parent_path().to_string(), "/a/b");
    /// assert!(ComponentPath::root().parent_path().is_root());
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> Self {
        let segments = self.segments();
        let keep = segments.len().saturating_sub(1);
        Self::from_trusted(
            segments[..keep].to_vec(),
            self.is_absolute(),
            self.flavor().clone(),
        )
    }

    /// String form of [`Path::parent_path`].
    #[must_use]
    pub fn parent_path_string(&self) -> String {
        let segments = self.segments();
        let keep = segments.len().saturating_sub(1);
        join_segments(
            &segments[..keep],
            self.is_absolute(),
            self.flavor().separator(),
        )
    }

    /// The last segment, or `""` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// assert_eq!(ComponentPath::parse("/a/b/c").unwrap().component_name(), "c");
    /// assert_eq!(ComponentPath::root().component_name(), "");
    /// ```
    #[must_use]
    pub fn component_name(&self) -> &str {
        self.segments().last().map_or("", String::as_str)
    }

    /// Split into parent path and leaf name.
    ///
    /// Always equal to `(self.parent_path(), self.component_name())`.
    #[must_use]
    pub fn split(&self) -> (Self, String) {
        (self.parent_path(), self.component_name().to_string())
    }

    /// The segment at `index`, where level 0 is closest to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.num_levels()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    ///
    /// let path = ComponentPath::parse("/model/jointset/hip").unwrap();
    /// assert_eq!(path.subcomponent_name_at_level(1).unwrap(), "jointset");
    /// assert!(path.subcomponent_name_at_level(3).unwrap_err().is_index_out_of_range());
    /// ```
    pub fn subcomponent_name_at_level(&self, index: usize) -> Result<&str> {
        self.segments()
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                levels: self.num_levels(),
            })
    }

    fn require_absolute(&self) -> Result<()> {
        if self.is_absolute() {
            Ok(())
        } else {
            Err(Error::NotAbsolute {
                path: self.to_string(),
            })
        }
    }

    fn require_same_flavor(&self, other: &Self) -> Result<()> {
        if self.flavor() == other.flavor() {
            Ok(())
        } else {
            Err(Error::FlavorMismatch {
                base: self.to_string(),
                other: other.to_string(),
            })
        }
    }

    /// Unresolved concatenation of two paths, for error reports.
    fn joined_with(&self, other: &Self) -> String {
        let segments: Vec<&str> = self
            .segments()
            .iter()
            .chain(other.segments())
            .map(String::as_str)
            .collect();
        join_segments(&segments, self.is_absolute(), self.flavor().separator())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::flavor::CustomFlavor;
    use crate::path::{ComponentPath, Path};

    fn path(raw: &str) -> ComponentPath {
        ComponentPath::parse(raw).unwrap()
    }

    fn rel(segments: &[&str]) -> ComponentPath {
        ComponentPath::from_segments(segments.iter().copied(), false).unwrap()
    }

    #[test]
    fn test_form_absolute_with_parent_segment() {
        let result = path("/a/b").form_absolute_path(&rel(&["..", "c"])).unwrap();
        assert_eq!(result.to_string(), "/a/c");
        assert!(result.is_absolute());
    }

    #[test]
    fn test_form_absolute_appends_relative() {
        let result = path("/a").form_absolute_path(&path("b/c")).unwrap();
        assert_eq!(result, path("/a/b/c"));
    }

    #[test]
    fn test_form_absolute_from_root() {
        let result = ComponentPath::root().form_absolute_path(&path("x")).unwrap();
        assert_eq!(result.to_string(), "/x");
    }

    #[test]
    fn test_form_absolute_other_already_absolute() {
        let other = path("/z/y");
        let result = path("/a/b").form_absolute_path(&other).unwrap();
        assert_eq!(result, other);
    }

    #[test]
    fn test_form_absolute_with_empty_other() {
        let base = path("/a/b");
        assert_eq!(base.form_absolute_path(&ComponentPath::empty()).unwrap(), base);
    }

    #[test]
    fn test_form_absolute_above_root() {
        let err = path("/a")
            .form_absolute_path(&rel(&["..", "..", "b"]))
            .unwrap_err();
        match err {
            Error::AboveRoot { path } => assert_eq!(path, "/a/../../b"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = ComponentPath::root()
            .form_absolute_path(&rel(&[".."]))
            .unwrap_err();
        assert!(err.is_above_root());
    }

    #[test]
    fn test_form_absolute_requires_absolute_base() {
        let err = path("a").form_absolute_path(&path("b")).unwrap_err();
        assert!(matches!(err, Error::NotAbsolute { ref path } if path == "a"));
    }

    #[test]
    fn test_form_relative_sibling() {
        let result = path("/a/b/c").form_relative_path(&path("/a/b/d")).unwrap();
        assert_eq!(result.segments(), ["..", "d"]);
        assert_eq!(result.to_string(), "../d");
        assert!(!result.is_absolute());
    }

    #[test]
    fn test_form_relative_descendant_and_ancestor() {
        let down = path("/a").form_relative_path(&path("/a/b/c")).unwrap();
        assert_eq!(down.to_string(), "b/c");

        let up = path("/a/b/c").form_relative_path(&path("/a")).unwrap();
        assert_eq!(up.to_string(), "../..");
    }

    #[test]
    fn test_form_relative_disjoint() {
        let result = path("/a/b").form_relative_path(&path("/x/y")).unwrap();
        assert_eq!(result.to_string(), "../../x/y");
    }

    #[test]
    fn test_form_relative_from_root() {
        let result = ComponentPath::root().form_relative_path(&path("/a")).unwrap();
        assert_eq!(result.to_string(), "a");
    }

    #[test]
    fn test_form_relative_self_is_empty() {
        let p = path("/a/b");
        let result = p.form_relative_path(&p).unwrap();
        assert!(result.is_empty());
        assert!(!result.is_absolute());
        assert_eq!(result.to_string(), "");
        assert_eq!(result, ComponentPath::empty());
        assert_eq!(p.form_absolute_path(&result).unwrap(), p);
    }

    #[test]
    fn test_form_relative_requires_absolute() {
        assert!(matches!(
            path("a").form_relative_path(&path("/b")),
            Err(Error::NotAbsolute { .. })
        ));
        assert!(matches!(
            path("/a").form_relative_path(&path("b")),
            Err(Error::NotAbsolute { .. })
        ));
    }

    #[test]
    fn test_relative_round_trip() {
        let from = path("/model/jointset/hip/frame");
        for target in ["/model/bodyset/pelvis", "/model", "/", "/model/jointset/hip/frame/geom"] {
            let to = path(target);
            let relative = from.form_relative_path(&to).unwrap();
            assert_eq!(from.form_absolute_path(&relative).unwrap(), to, "{target}");
        }
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(path("/a/b/c").parent_path(), path("/a/b"));
        assert_eq!(path("/a").parent_path(), ComponentPath::root());
        assert_eq!(path("a/b").parent_path(), path("a"));
        assert_eq!(path("a").parent_path(), ComponentPath::empty());
    }

    #[test]
    fn test_parent_of_zero_segments_is_itself() {
        assert_eq!(ComponentPath::root().parent_path(), ComponentPath::root());
        assert_eq!(ComponentPath::empty().parent_path(), ComponentPath::empty());
    }

    #[test]
    fn test_parent_path_string() {
        assert_eq!(path("/a/b/c").parent_path_string(), "/a/b");
        assert_eq!(path("/a").parent_path_string(), "/");
        assert_eq!(path("a").parent_path_string(), "");
    }

    #[test]
    fn test_component_name() {
        assert_eq!(path("/a/b/c").component_name(), "c");
        assert_eq!(path("c").component_name(), "c");
        assert_eq!(ComponentPath::root().component_name(), "");
        assert_eq!(ComponentPath::empty().component_name(), "");
    }

    #[test]
    fn test_split() {
        let (parent, leaf) = path("/a/b/c").split();
        assert_eq!(parent, path("/a/b"));
        assert_eq!(leaf, "c");

        let (parent, leaf) = ComponentPath::root().split();
        assert!(parent.is_root());
        assert_eq!(leaf, "");
    }

    #[test]
    fn test_split_matches_parent_and_name() {
        for raw in ["/a/b/c", "/a", "x/y", "/", ""] {
            let p = path(raw);
            let (parent, leaf) = p.split();
            assert_eq!(parent, p.parent_path());
            assert_eq!(leaf, p.component_name());
        }
    }

    #[test]
    fn test_subcomponent_name_at_level() {
        let p = path("/a/b/c");
        assert_eq!(p.subcomponent_name_at_level(0).unwrap(), "a");
        assert_eq!(p.subcomponent_name_at_level(2).unwrap(), "c");

        match p.subcomponent_name_at_level(3).unwrap_err() {
            Error::IndexOutOfRange { index, levels } => {
                assert_eq!(index, 3);
                assert_eq!(levels, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(ComponentPath::root()
            .subcomponent_name_at_level(0)
            .unwrap_err()
            .is_index_out_of_range());
    }

    #[test]
    fn test_algebra_keeps_custom_flavor() {
        let flavor = CustomFlavor::new(':', vec![]).unwrap();
        let from = Path::parse_with(":a:b:c", flavor.clone()).unwrap();
        let to = Path::parse_with(":a:x", flavor.clone()).unwrap();

        let relative = from.form_relative_path(&to).unwrap();
        assert_eq!(relative.to_string(), "..:..:x");
        assert_eq!(relative.flavor(), &flavor);

        let back = from.form_absolute_path(&relative).unwrap();
        assert_eq!(back, to);
        assert_eq!(from.parent_path().to_string(), ":a:b");
    }

    #[test]
    fn test_algebra_rejects_mixed_flavors() {
        let colon = CustomFlavor::new(':', vec![]).unwrap();
        let slash = CustomFlavor::component();
        let base = Path::parse_with(":a:b", colon).unwrap();
        let other = Path::parse_with("/a/c", slash.clone()).unwrap();

        let err = base.form_relative_path(&other).unwrap_err();
        assert!(matches!(err, Error::FlavorMismatch { .. }));

        let relative = Path::parse_with("c", slash).unwrap();
        let err = base.form_absolute_path(&relative).unwrap_err();
        assert!(matches!(err, Error::FlavorMismatch { .. }));
    }
}

//! Path relationship checking.
//!
//! This module provides functionality to determine the relationship between
//! two paths, such as whether one is an ancestor or descendant of the other.

use crate::flavor::Flavor;

use super::types::Path;

/// Relationship between two paths.
///
/// This enum describes how two paths relate to each other in the component
/// tree. Comparison is segment-wise, so `/a/bc` is never mistaken for a
/// descendant of `/a/b`.
///
/// # Examples
///
/// ```
/// use compath::ComponentPath;
/// use compath::path::PathRelationship;
///
/// let parent = ComponentPath::parse("/model/bodyset").unwrap();
/// let child = ComponentPath::parse("/model/bodyset/pelvis").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    ///
    /// This means the second path is somewhere beneath the first in the
    /// tree.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// The paths are unrelated.
    ///
    /// Neither path is an ancestor or descendant of the other: they are in
    /// different branches of the tree, at least one of them is relative, or
    /// their flavors differ.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Only absolute paths of the same flavor are compared. A relative path
    /// has no fixed place in the tree, so it is unrelated to everything,
    /// itself included.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    /// use compath::path::PathRelationship;
    ///
    /// let a = ComponentPath::parse("/a").unwrap();
    /// let ab = ComponentPath::parse("/a/b").unwrap();
    /// let b = ComponentPath::parse("/b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between<F: Flavor>(path1: &Path<F>, path2: &Path<F>) -> Self {
        if !path1.is_absolute() || !path2.is_absolute() || path1.flavor() != path2.flavor() {
            return Self::Unrelated;
        }

        let p1 = path1.segments();
        let p2 = path2.segments();

        if p1 == p2 {
            return Self::Same;
        }

        // Check if path1 is ancestor of path2
        if p2.starts_with(p1) {
            return Self::Ancestor;
        }

        // Check if path1 is descendant of path2
        if p1.starts_with(p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within another (descendant or same).
    #[must_use]
    pub fn is_within<F: Flavor>(path: &Path<F>, ancestor: &Path<F>) -> bool {
        let rel = Self::between(path, ancestor);
        matches!(rel, Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains<F: Flavor>(path: &Path<F>, other: &Path<F>) -> bool {
        let rel = Self::between(path, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use compath::ComponentPath;
    /// use compath::path::PathRelationship;
    ///
    /// let p1 = ComponentPath::parse("/a").unwrap();
    /// let p2 = ComponentPath::parse("/a/b").unwrap();
    ///
    /// let desc = PathRelationship::Ancestor.description(&p1, &p2);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description<F: Flavor>(&self, path1: &Path<F>, path2: &Path<F>) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated"),
        }
    }
}

//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on path algebra and relationships.

use super::relationship::PathRelationship;
use super::types::ComponentPath;
use proptest::prelude::*;

// Strategy for generating segment names
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = ComponentPath> {
    prop::collection::vec(segment_strategy(), 0..8).prop_map(|parts| {
        ComponentPath::from_segments(parts, true).expect("generated segments are valid")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Parsing the display form gives back the same path
    #[test]
    fn display_parse_round_trip(path in absolute_path_strategy()) {
        let reparsed = ComponentPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    // Relativize then absolutize returns the target
    #[test]
    fn relative_then_absolute_round_trip(
        from in absolute_path_strategy(),
        to in absolute_path_strategy()
    ) {
        let relative = from.form_relative_path(&to).unwrap();
        prop_assert!(!relative.is_absolute());
        let reparsed = ComponentPath::parse_relative(&relative.to_string()).unwrap();
        prop_assert_eq!(&reparsed, &relative);
        prop_assert_eq!(from.form_absolute_path(&relative).unwrap(), to);
    }

    // Round trip holds for every ancestor of a path
    #[test]
    fn ancestor_round_trip(path in absolute_path_strategy()) {
        let mut ancestor = path.clone();
        loop {
            prop_assert!(PathRelationship::contains(&ancestor, &path));
            let relative = ancestor.form_relative_path(&path).unwrap();
            prop_assert!(relative.segments().iter().all(|s| s != ".."));
            prop_assert_eq!(ancestor.form_absolute_path(&relative).unwrap(), path.clone());
            if ancestor.is_root() {
                break;
            }
            ancestor = ancestor.parent_path();
        }
    }

    // Relativizing a path against itself gives "self"
    #[test]
    fn relative_to_self_is_empty(path in absolute_path_strategy()) {
        let relative = path.form_relative_path(&path).unwrap();
        prop_assert!(relative.is_empty());
        prop_assert_eq!(relative.to_string(), "");
    }

    // split is parent_path plus component_name
    #[test]
    fn split_consistent(path in absolute_path_strategy()) {
        let (parent, leaf) = path.split();
        prop_assert_eq!(&parent, &path.parent_path());
        prop_assert_eq!(leaf.as_str(), path.component_name());
        if !path.is_root() {
            prop_assert_eq!(parent.num_levels() + 1, path.num_levels());
        }
    }

    // Every level index below the count resolves, the count itself does not
    #[test]
    fn level_access_bounds(path in absolute_path_strategy()) {
        for (index, segment) in path.segments().iter().enumerate() {
            prop_assert_eq!(path.subcomponent_name_at_level(index).unwrap(), segment.as_str());
        }
        prop_assert!(path.subcomponent_name_at_level(path.num_levels()).is_err());
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(
        path1 in absolute_path_strategy(),
        path2 in absolute_path_strategy()
    ) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Path relationship is reflexive
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }
}

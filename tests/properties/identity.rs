//! Property tests for identity assignment.

use proptest::prelude::*;

use treemenu::{build_data, BuildConfig, Identifier, Lineage, SortOrder};

use crate::strategies::{keyed_forest, plain_forest};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Building the same data twice yields identical snapshots.
    #[test]
    fn property_build_is_deterministic(roots in plain_forest()) {
        let config = BuildConfig::default();
        let first = build_data(roots.clone(), &config);
        let second = build_data(roots, &config);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Every lineage is its parent's lineage plus its own identifier,
    /// and resolves back to the node that carries it.
    #[test]
    fn property_lineages_extend_parent_and_resolve(roots in plain_forest()) {
        let tree = build_data(roots, &BuildConfig::default());

        for (position, root) in tree.roots().iter().enumerate() {
            prop_assert_eq!(&root.lineage, &Lineage::from(vec![Identifier::Index(position)]));
        }
        for node in tree.walk() {
            for (position, child) in node.children.iter().enumerate() {
                prop_assert_eq!(&child.lineage, &node.lineage.child(Identifier::Index(position)));
            }
            let found = tree.find(&node.lineage).map(|n| n.label.clone());
            prop_assert_eq!(found, Some(node.label.clone()));
        }
        prop_assert_eq!(tree.walk().len(), tree.len());
    }

    /// PROPERTY: Field addressing resolves every lineage to its own node.
    #[test]
    fn property_field_lineages_resolve(roots in keyed_forest()) {
        let tree = build_data(roots, &BuildConfig::default().with_identifier("key"));

        prop_assert!(tree.warnings().is_empty());
        for node in tree.walk() {
            prop_assert!(matches!(node.id, Identifier::Key(_)));
            let found = tree.find(&node.lineage).map(|n| n.lineage.clone());
            prop_assert_eq!(found.as_ref(), Some(&node.lineage));
        }
    }

    /// PROPERTY: Label ordering sorts each sibling list and index
    /// identifiers follow the sorted positions.
    #[test]
    fn property_sorted_siblings_get_post_sort_indices(roots in plain_forest()) {
        let tree = build_data(roots, &BuildConfig::default().with_sort(SortOrder::ByLabel));

        let labels: Vec<_> = tree.roots().iter().map(|n| n.label.clone()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        prop_assert_eq!(labels, sorted);

        for node in tree.walk() {
            let labels: Vec<_> = node.children.iter().map(|n| n.label.clone()).collect();
            let mut sorted = labels.clone();
            sorted.sort();
            prop_assert_eq!(labels, sorted);

            for (position, child) in node.children.iter().enumerate() {
                prop_assert_eq!(&child.id, &Identifier::Index(position));
            }
        }
    }
}

//! Property tests for lineage-addressed toggles.

use proptest::prelude::*;

use treemenu::{build_data, mutate, BuildConfig, Identifier, Lineage, TreeSnapshot};

use crate::strategies::{flagged_forest, plain_forest, property};

/// Lineage of the `index`-th node in pre-order
fn pick(tree: &TreeSnapshot, index: prop::sample::Index) -> Lineage {
    let nodes = tree.walk();
    nodes[index.index(nodes.len())].lineage.clone()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After a toggle the whole subtree holds the target's new
    /// value and nothing outside the subtree changed.
    #[test]
    fn property_toggle_cascades_within_subtree(
        roots in flagged_forest(),
        index in any::<prop::sample::Index>(),
        property in property(),
    ) {
        let before = build_data(roots, &BuildConfig::default());
        let target = pick(&before, index);
        let old_value = before.find(&target).map(|n| n.get(property));

        let after = mutate(&before, &target, property);
        let new_value = after.find(&target).map(|n| n.get(property));
        prop_assert_eq!(new_value, old_value.map(|v| !v));

        let (old_nodes, new_nodes) = (before.walk(), after.walk());
        prop_assert_eq!(old_nodes.len(), new_nodes.len());
        for (old, new) in old_nodes.into_iter().zip(new_nodes) {
            prop_assert_eq!(&old.lineage, &new.lineage);
            if new.lineage.starts_with(&target) {
                prop_assert_eq!(Some(new.get(property)), new_value);
            } else {
                prop_assert_eq!(old.get(property), new.get(property));
            }
        }
    }

    /// PROPERTY: Two toggles of a uniform subtree restore the tree.
    #[test]
    fn property_double_toggle_restores(
        roots in plain_forest(),
        index in any::<prop::sample::Index>(),
        property in property(),
    ) {
        let tree = build_data(roots, &BuildConfig::default());
        prop_assume!(!tree.is_empty());
        let target = pick(&tree, index);

        let twice = mutate(&mutate(&tree, &target, property), &target, property);
        prop_assert_eq!(twice, tree);
    }

    /// PROPERTY: Toggling twice restores the target even when descendants
    /// started out mixed; descendants end equal to the target.
    #[test]
    fn property_double_toggle_restores_target(
        roots in flagged_forest(),
        index in any::<prop::sample::Index>(),
        property in property(),
    ) {
        let tree = build_data(roots, &BuildConfig::default());
        let target = pick(&tree, index);
        let original = tree.find(&target).map(|n| n.get(property));

        let twice = mutate(&mutate(&tree, &target, property), &target, property);

        prop_assert_eq!(twice.find(&target).map(|n| n.get(property)), original);
        for node in twice.walk() {
            if node.lineage.starts_with(&target) {
                prop_assert_eq!(Some(node.get(property)), original);
            }
        }
    }

    /// PROPERTY: A lineage that resolves to nothing leaves the tree unchanged.
    #[test]
    fn property_miss_is_no_op(
        roots in plain_forest(),
        index in any::<prop::sample::Index>(),
        property in property(),
    ) {
        let tree = build_data(roots, &BuildConfig::default());

        let past_roots = Lineage::from(vec![Identifier::Index(tree.roots().len())]);
        prop_assert_eq!(mutate(&tree, &past_roots, property), tree.clone());

        if !tree.is_empty() {
            let parent = pick(&tree, index);
            let children = tree.find(&parent).map(|n| n.children.len()).unwrap_or(0);
            let past_children = parent.child(Identifier::Index(children));
            prop_assert_eq!(mutate(&tree, &past_children, property), tree.clone());
        }

        prop_assert_eq!(mutate(&tree, &Lineage::root(), property), tree);
    }

    /// PROPERTY: The input snapshot is never changed by a toggle.
    #[test]
    fn property_input_snapshot_is_untouched(
        roots in flagged_forest(),
        index in any::<prop::sample::Index>(),
        property in property(),
    ) {
        let tree = build_data(roots, &BuildConfig::default());
        let copy = tree.clone();
        let target = pick(&tree, index);

        let _ = mutate(&tree, &target, property);
        prop_assert_eq!(tree, copy);
    }
}

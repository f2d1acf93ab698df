//! Scenario: Checklist with cascading checks
//!
//! Journey: A host builds a small index-addressed checklist, checks a parent,
//! then unchecks one child.
//!
//! Success Criteria:
//! - Lineages are [0], [0,0], [0,1]
//! - Checking the parent checks every descendant
//! - Unchecking a child leaves its parent and sibling checked

use treemenu::{build_data, mutate, BuildConfig, Lineage, NodeProperty, RawInput};

const DATA: &str = r#"[{"label": "A", "children": [{"label": "B"}, {"label": "C", "checked": false}]}]"#;

fn checked(tree: &treemenu::TreeSnapshot, lineage: [usize; 2]) -> bool {
    tree.find(&Lineage::from(lineage)).unwrap().checked
}

/// SCENARIO: Check parent, then uncheck one child
#[test]
fn scenario_check_parent_then_uncheck_child() {
    let input = RawInput::from_json_str(DATA).unwrap();
    let tree = build_data(input, &BuildConfig::default());

    let root = &tree.roots()[0];
    assert_eq!(root.lineage, Lineage::from([0]));
    assert_eq!(root.children[0].lineage, Lineage::from([0, 0]));
    assert_eq!(root.children[1].lineage, Lineage::from([0, 1]));

    let tree = mutate(&tree, &Lineage::from([0]), NodeProperty::Checked);
    assert!(tree.find(&Lineage::from([0])).unwrap().checked);
    assert!(checked(&tree, [0, 0]));
    assert!(checked(&tree, [0, 1]));

    let tree = mutate(&tree, &Lineage::from([0, 1]), NodeProperty::Checked);
    assert!(tree.find(&Lineage::from([0])).unwrap().checked);
    assert!(checked(&tree, [0, 0]));
    assert!(!checked(&tree, [0, 1]));
}

/// SCENARIO: Stale lineage after data shrank
#[test]
fn scenario_stale_lineage_is_ignored() {
    let tree = build_data(RawInput::from_json_str(DATA).unwrap(), &BuildConfig::default());

    let stale = Lineage::from([0, 2]);
    let after = mutate(&tree, &stale, NodeProperty::Checked);

    assert_eq!(after, tree);
}

/// SCENARIO: Export state and rebuild
#[test]
fn scenario_export_and_rebuild_keeps_state() {
    let tree = build_data(RawInput::from_json_str(DATA).unwrap(), &BuildConfig::default());
    let tree = mutate(&tree, &Lineage::from([0, 0]), NodeProperty::Selected);

    let rebuilt = build_data(tree.to_raw(), &BuildConfig::default());

    assert_eq!(rebuilt.selected_lineages(), vec![Lineage::from([0, 0])]);
    assert_eq!(rebuilt, tree);
}

//! Scenario: Label-sorted menu
//!
//! Journey: A host enables label ordering and addresses nodes after the sort.
//!
//! Success Criteria:
//! - Siblings come out in label order
//! - Index identifiers follow the sorted order
//! - Field identifiers survive a re-sort

use treemenu::{
    build_data, mutate, BuildConfig, Lineage, NodeProperty, RawNodeData, SortMode, SortOrder,
};

/// SCENARIO: [B, A] sorted by label gives [A, B] with A at [0]
#[test]
fn scenario_sort_assigns_indices_after_ordering() {
    let data = vec![RawNodeData::new("B"), RawNodeData::new("A")];
    let tree = build_data(data, &BuildConfig::default().with_sort(SortMode::Label.into()));

    let labels: Vec<_> = tree.roots().iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B"]);
    assert_eq!(tree.roots()[0].lineage, Lineage::from([0]));

    let tree = mutate(&tree, &Lineage::from([0]), NodeProperty::Checked);
    assert!(tree.roots()[0].checked);
    assert_eq!(tree.roots()[0].label, "A");
}

/// SCENARIO: Custom comparator, field addressing stays stable
#[test]
fn scenario_custom_comparator_with_field_identifiers() {
    let data = vec![
        RawNodeData::new("short").with_attribute("id", "s"),
        RawNodeData::new("a much longer label").with_attribute("id", "l"),
        RawNodeData::new("mid label").with_attribute("id", "m"),
    ];
    let by_length = SortOrder::by(|a, b| b.label.len().cmp(&a.label.len()));
    let config = BuildConfig::default()
        .with_identifier("id")
        .with_sort(by_length);

    let tree = build_data(data, &config);

    let ids: Vec<_> = tree.roots().iter().map(|n| n.id.to_string()).collect();
    assert_eq!(ids, vec!["l", "m", "s"]);

    let tree = mutate(&tree, &Lineage::keys(["s"]), NodeProperty::Selected);
    assert_eq!(tree.selected_lineages(), vec![Lineage::keys(["s"])]);
    assert_eq!(tree.roots()[2].label, "short");
}

/// SCENARIO: Missing label sorts by its index text
#[test]
fn scenario_missing_label_uses_input_position() {
    let mut unlabeled = RawNodeData::default();
    unlabeled.label = None;
    let data = vec![RawNodeData::new("b"), unlabeled];

    let tree = build_data(data, &BuildConfig::default().with_sort(SortOrder::ByLabel));

    let labels: Vec<_> = tree.roots().iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "b"]);
}

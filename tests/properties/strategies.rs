//! Shared generators.

use proptest::prelude::*;

use treemenu::{NodeProperty, RawNodeData};

fn label() -> impl Strategy<Value = String> {
    "[a-z]{1,4}"
}

/// Forest of nodes with unset state flags
pub fn plain_forest() -> impl Strategy<Value = Vec<RawNodeData>> {
    let leaf = label().prop_map(RawNodeData::new);
    let node = leaf.prop_recursive(4, 32, 4, |inner| {
        (label(), prop::collection::vec(inner, 0..4))
            .prop_map(|(label, children)| RawNodeData::new(label).with_children(children))
    });
    prop::collection::vec(node, 0..5)
}

/// Forest whose nodes carry random checked flags
pub fn flagged_forest() -> impl Strategy<Value = Vec<RawNodeData>> {
    let leaf = (label(), any::<bool>()).prop_map(|(label, checked)| {
        let mut raw = RawNodeData::new(label);
        raw.checked = Some(checked);
        raw
    });
    let node = leaf.prop_recursive(4, 32, 4, |inner| {
        (label(), any::<bool>(), prop::collection::vec(inner, 0..4)).prop_map(
            |(label, checked, children)| {
                let mut raw = RawNodeData::new(label).with_children(children);
                raw.checked = Some(checked);
                raw
            },
        )
    });
    prop::collection::vec(node, 1..5)
}

/// Forest whose nodes carry a sibling-unique `key` field
pub fn keyed_forest() -> impl Strategy<Value = Vec<RawNodeData>> {
    plain_forest().prop_map(assign_keys)
}

fn assign_keys(nodes: Vec<RawNodeData>) -> Vec<RawNodeData> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, mut node)| {
            let children = std::mem::take(&mut node.children);
            node.with_attribute("key", format!("k{i}"))
                .with_children(assign_keys(children))
        })
        .collect()
}

pub fn property() -> impl Strategy<Value = NodeProperty> {
    prop::sample::select(NodeProperty::ALL.to_vec())
}

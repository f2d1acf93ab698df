//! Flattening a snapshot into the rows a view draws.

use crate::domain::entities::{Node, TreeSnapshot};
use crate::domain::value_objects::Lineage;

/// One drawable line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Lineage of the node this row shows
    pub lineage: Lineage,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Display label
    pub label: String,
    pub checkbox: bool,
    pub checked: bool,
    pub selected: bool,
    /// Effective collapsed state (`collapsible && collapsed`)
    pub collapsed: bool,
    pub has_children: bool,
}

/// Rows for every node not hidden under a collapsed ancestor, in pre-order
pub fn visible_rows(tree: &TreeSnapshot) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    for root in tree.roots() {
        flatten_node(root, 0, &mut rows);
    }
    rows
}

fn flatten_node(node: &Node, depth: usize, rows: &mut Vec<VisibleRow>) {
    rows.push(VisibleRow {
        lineage: node.lineage.clone(),
        depth,
        label: node.label.clone(),
        checkbox: node.checkbox,
        checked: node.checked,
        selected: node.selected,
        collapsed: node.is_collapsed(),
        has_children: node.has_children(),
    });

    if node.is_collapsed() {
        return;
    }
    for child in &node.children {
        flatten_node(child, depth + 1, rows);
    }
}

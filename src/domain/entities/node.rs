//! Built tree nodes
//!
//! A `Node` carries its resolved properties, its identifier and lineage, and
//! its children behind `Arc` so snapshots can share untouched subtrees.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RawNodeData;
use crate::domain::services::NodeFields;
use crate::domain::value_objects::{Identifier, Lineage, NodeProperty};

/// Menu-wide property defaults applied to every node that leaves them unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    pub collapsible: bool,
    pub collapsed: bool,
    pub checkbox: bool,
    pub checked: bool,
    pub selected: bool,
    pub expand_icon_class: String,
    pub collapse_icon_class: String,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            collapsible: true,
            collapsed: false,
            checkbox: false,
            checked: false,
            selected: false,
            expand_icon_class: String::new(),
            collapse_icon_class: String::new(),
        }
    }
}

/// A node in a built tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub label: String,
    /// Identifier among siblings under the snapshot's addressing scheme
    pub id: Identifier,
    /// Identifiers from the root down to and including this node
    pub lineage: Lineage,
    pub checked: bool,
    pub selected: bool,
    pub collapsed: bool,
    pub collapsible: bool,
    pub checkbox: bool,
    pub expand_icon_class: String,
    pub collapse_icon_class: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    pub children: Vec<Arc<Node>>,
}

impl Node {
    /// A childless node with built-in defaults and no identity yet
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::with_defaults(label, &NodeDefaults::default())
    }

    pub fn with_defaults(label: impl Into<String>, defaults: &NodeDefaults) -> Self {
        Self {
            label: label.into(),
            id: Identifier::Missing,
            lineage: Lineage::root(),
            checked: defaults.checked,
            selected: defaults.selected,
            collapsed: defaults.collapsed,
            collapsible: defaults.collapsible,
            checkbox: defaults.checkbox,
            expand_icon_class: defaults.expand_icon_class.clone(),
            collapse_icon_class: defaults.collapse_icon_class.clone(),
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn get(&self, property: NodeProperty) -> bool {
        match property {
            NodeProperty::Checked => self.checked,
            NodeProperty::Selected => self.selected,
            NodeProperty::Collapsed => self.collapsed,
        }
    }

    pub fn set(&mut self, property: NodeProperty, value: bool) {
        match property {
            NodeProperty::Checked => self.checked = value,
            NodeProperty::Selected => self.selected = value,
            NodeProperty::Collapsed => self.collapsed = value,
        }
    }

    /// Whether children are hidden: only collapsible nodes can collapse
    pub fn is_collapsed(&self) -> bool {
        self.collapsible && self.collapsed
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, this node included
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.subtree_len())
            .sum::<usize>()
    }

    /// Pre-order walk of this subtree
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk_into(&mut out);
        out
    }

    fn walk_into<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.walk_into(out);
        }
    }

    /// Export the node's current state as raw data for a later rebuild
    pub fn to_raw(&self) -> RawNodeData {
        RawNodeData {
            label: Some(self.label.clone()),
            children: self.children.iter().map(|child| child.to_raw()).collect(),
            checked: Some(self.checked),
            selected: Some(self.selected),
            collapsed: Some(self.collapsed),
            collapsible: Some(self.collapsible),
            checkbox: Some(self.checkbox),
            expand_icon_class: non_empty(&self.expand_icon_class),
            collapse_icon_class: non_empty(&self.collapse_icon_class),
            attributes: self.attributes.clone(),
        }
    }
}

impl NodeFields for Node {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "label" => Some(Value::String(self.label.clone())),
            "checked" => Some(Value::Bool(self.checked)),
            "selected" => Some(Value::Bool(self.selected)),
            "collapsed" => Some(Value::Bool(self.collapsed)),
            "collapsible" => Some(Value::Bool(self.collapsible)),
            "checkbox" => Some(Value::Bool(self.checkbox)),
            "expandIconClass" => Some(Value::String(self.expand_icon_class.clone())),
            "collapseIconClass" => Some(Value::String(self.collapse_icon_class.clone())),
            _ => self.attributes.get(name).cloned(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

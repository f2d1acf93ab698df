//! Declarative node builder
//!
//! The programmatic alternative to handing a tree menu raw data: nodes are
//! declared with a typed builder and nested with `child`. A menu accepts
//! either this form or raw data, never both.

use serde_json::Value;

use super::RawNodeData;

/// A node declared in code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarativeNode {
    data: RawNodeData,
}

impl DeclarativeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            data: RawNodeData::new(label),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.data.checked = Some(checked);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.data.selected = Some(selected);
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.data.collapsed = Some(collapsed);
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.data.collapsible = Some(collapsible);
        self
    }

    pub fn checkbox(mut self, checkbox: bool) -> Self {
        self.data.checkbox = Some(checkbox);
        self
    }

    pub fn icon_classes(mut self, expand: impl Into<String>, collapse: impl Into<String>) -> Self {
        self.data.expand_icon_class = Some(expand.into());
        self.data.collapse_icon_class = Some(collapse.into());
        self
    }

    /// Set an extra data field, e.g. the identifier field
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: DeclarativeNode) -> Self {
        self.data.children.push(child.into_raw());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = DeclarativeNode>) -> Self {
        self.data
            .children
            .extend(children.into_iter().map(DeclarativeNode::into_raw));
        self
    }

    pub fn into_raw(self) -> RawNodeData {
        self.data
    }
}

impl From<DeclarativeNode> for RawNodeData {
    fn from(node: DeclarativeNode) -> Self {
        node.into_raw()
    }
}

/// Extract raw data from declared nodes
pub fn extract_data(nodes: impl IntoIterator<Item = DeclarativeNode>) -> Vec<RawNodeData> {
    nodes.into_iter().map(DeclarativeNode::into_raw).collect()
}

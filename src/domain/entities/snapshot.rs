//! Tree snapshots
//!
//! A `TreeSnapshot` is one complete, self-consistent forest produced by a
//! build. It remembers the addressing scheme its lineages were computed
//! under so lookups and mutations resolve identifiers the same way.
//!
//! Snapshots are persistent: cloning is cheap and mutation never changes a
//! snapshot another owner still holds (see `domain::services::mutator`).

use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::{Node, RawNodeData};
use crate::domain::services::{identify, Mutation};
use crate::domain::value_objects::{
    AddressingScheme, BuildWarning, Identifier, Lineage, NodeProperty,
};

/// Ordered forest of root nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeSnapshot {
    roots: Vec<Arc<Node>>,
    addressing: AddressingScheme,
    warnings: Vec<BuildWarning>,
}

impl TreeSnapshot {
    pub fn new(
        roots: Vec<Arc<Node>>,
        addressing: AddressingScheme,
        warnings: Vec<BuildWarning>,
    ) -> Self {
        Self {
            roots,
            addressing,
            warnings,
        }
    }

    pub fn roots(&self) -> &[Arc<Node>] {
        &self.roots
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<Arc<Node>> {
        &mut self.roots
    }

    pub fn addressing(&self) -> &AddressingScheme {
        &self.addressing
    }

    /// Identity problems found while building
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.roots.iter().map(|root| root.subtree_len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order walk over every node
    pub fn walk(&self) -> Vec<&Node> {
        self.roots.iter().flat_map(|root| root.walk()).collect()
    }

    /// Locate the first node addressed by `lineage`.
    ///
    /// Identifiers are resolved per level exactly as the mutator does, so a
    /// lineage that finds a node here is one a mutation will reach.
    pub fn find(&self, lineage: &Lineage) -> Option<&Node> {
        let (first, rest) = lineage.identifiers().split_first()?;
        let mut current = self.match_sibling(&self.roots, first)?;
        for id in rest {
            current = self.match_sibling(&current.children, id)?;
        }
        Some(current)
    }

    fn match_sibling<'a>(&self, siblings: &'a [Arc<Node>], id: &Identifier) -> Option<&'a Node> {
        siblings.iter().enumerate().find_map(|(position, node)| {
            let node: &Node = node;
            (identify(&self.addressing, node, position) == *id).then_some(node)
        })
    }

    /// Lineages of every node whose `property` is set, in pre-order
    pub fn lineages_where(&self, property: NodeProperty) -> Vec<Lineage> {
        self.walk()
            .into_iter()
            .filter(|node| node.get(property))
            .map(|node| node.lineage.clone())
            .collect()
    }

    pub fn checked_lineages(&self) -> Vec<Lineage> {
        self.lineages_where(NodeProperty::Checked)
    }

    pub fn selected_lineages(&self) -> Vec<Lineage> {
        self.lineages_where(NodeProperty::Selected)
    }

    /// Toggle `property` at `lineage` in place.
    ///
    /// Only nodes still shared with another snapshot are copied.
    pub fn toggle(&mut self, lineage: &Lineage, property: NodeProperty) -> Mutation {
        crate::domain::services::toggle(self, lineage, property)
    }

    /// Export current state as raw data, for callers that rebuild later
    pub fn to_raw(&self) -> Vec<RawNodeData> {
        self.roots.iter().map(|root| root.to_raw()).collect()
    }
}

// A snapshot serializes as its list of root nodes
impl Serialize for TreeSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.roots.serialize(serializer)
    }
}

//! Tree state mutator
//!
//! Toggles one property on the node a lineage addresses and cascades the new
//! value to its whole subtree. The lineage is consumed root first; at each
//! level every sibling whose identifier matches is followed. A lineage that
//! resolves to nothing leaves the tree unchanged.
//!
//! Nodes sit behind `Arc`, so rewriting goes through `Arc::make_mut`: nodes
//! shared with another snapshot are copied before they change, unshared
//! ones are changed in place, and subtrees off the addressed path are never
//! touched.

use std::sync::Arc;

use crate::domain::entities::{Node, TreeSnapshot};
use crate::domain::value_objects::{AddressingScheme, Identifier, Lineage, NodeProperty};

use super::identity::identify;

/// Outcome of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mutation {
    /// Number of target nodes the lineage resolved to
    pub matched: usize,
    /// Value written to the last matched target
    pub new_value: Option<bool>,
}

impl Mutation {
    pub fn is_miss(&self) -> bool {
        self.matched == 0
    }
}

/// Return a new snapshot with `property` toggled at `lineage`.
///
/// `tree` itself is left as it was; the result shares every subtree the
/// toggle did not reach.
pub fn mutate(tree: &TreeSnapshot, lineage: &Lineage, property: NodeProperty) -> TreeSnapshot {
    let mut next = tree.clone();
    toggle(&mut next, lineage, property);
    next
}

/// Toggle `property` at `lineage` on a snapshot the caller owns
#[tracing::instrument(skip_all, fields(lineage = %lineage, property = %property))]
pub fn toggle(tree: &mut TreeSnapshot, lineage: &Lineage, property: NodeProperty) -> Mutation {
    let scheme = tree.addressing().clone();
    let mut outcome = Mutation::default();

    rewrite_level(
        tree.roots_mut(),
        lineage.identifiers(),
        &scheme,
        property,
        &mut outcome,
    );

    if outcome.is_miss() {
        tracing::debug!("lineage matched no node");
    } else {
        tracing::debug!(
            matched = outcome.matched,
            value = ?outcome.new_value,
            "toggled"
        );
    }
    outcome
}

fn rewrite_level(
    level: &mut [Arc<Node>],
    queue: &[Identifier],
    scheme: &AddressingScheme,
    property: NodeProperty,
    outcome: &mut Mutation,
) {
    let Some((id, rest)) = queue.split_first() else {
        return;
    };

    let mut matches = 0;
    for position in 0..level.len() {
        if identify(scheme, &*level[position], position) != *id {
            continue;
        }
        matches += 1;

        let node = Arc::make_mut(&mut level[position]);
        if rest.is_empty() {
            let value = !node.get(property);
            set_subtree(node, property, value);
            tracing::trace!(label = %node.label, value, "target");
            outcome.matched += 1;
            outcome.new_value = Some(value);
        } else {
            rewrite_level(&mut node.children, rest, scheme, property, outcome);
        }
    }

    if matches > 1 {
        tracing::warn!(
            identifier = %id,
            matches,
            "identifier is shared by several siblings; all of them were followed"
        );
    }
}

fn set_subtree(node: &mut Node, property: NodeProperty, value: bool) {
    node.set(property, value);
    for child in &mut node.children {
        set_subtree(Arc::make_mut(child), property, value);
    }
}

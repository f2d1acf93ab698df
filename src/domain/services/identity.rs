//! Lineage identity
//!
//! Computes a node's identifier under an addressing scheme and extends an
//! ancestor lineage with it. Both functions are pure; the builder and the
//! mutator call the same `identify` so lineages resolve identically.

use serde_json::Value;

use crate::domain::value_objects::{AddressingScheme, Identifier, Lineage};

/// Read access to a node's data fields by name
pub trait NodeFields {
    /// Value of the named field, `None` when absent
    fn field(&self, name: &str) -> Option<Value>;
}

/// Identifier of a node at `index` among its siblings.
///
/// Under field addressing an absent field yields `Identifier::Missing`;
/// addressing such a node is the caller's responsibility.
pub fn identify<N>(scheme: &AddressingScheme, node: &N, index: usize) -> Identifier
where
    N: NodeFields + ?Sized,
{
    match scheme {
        AddressingScheme::Index => Identifier::Index(index),
        AddressingScheme::Field(name) => Identifier::from_field_value(node.field(name).as_ref()),
    }
}

/// `ancestor` with `identifier` appended
pub fn build_lineage(ancestor: &Lineage, identifier: Identifier) -> Lineage {
    ancestor.child(identifier)
}

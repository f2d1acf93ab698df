//! Identity ambiguity warnings raised while building a tree
//!
//! None of these stop a build. They flag lineages that mutation cannot
//! address reliably.

use std::fmt;

use super::{Identifier, Lineage};

/// Non-fatal identity problem found during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// Two or more siblings under `parent` share `identifier`
    DuplicateIdentifier {
        parent: Lineage,
        identifier: Identifier,
        count: usize,
    },
    /// The designated identifier field is absent on the node at `lineage`
    MissingIdentifier { lineage: Lineage, field: String },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::DuplicateIdentifier {
                parent,
                identifier,
                count,
            } => {
                if parent.is_empty() {
                    write!(f, "{} root nodes share identifier '{}'", count, identifier)
                } else {
                    write!(
                        f,
                        "{} children of '{}' share identifier '{}'",
                        count, parent, identifier
                    )
                }
            }
            BuildWarning::MissingIdentifier { lineage, field } => {
                write!(f, "node '{}' has no '{}' field", lineage, field)
            }
        }
    }
}

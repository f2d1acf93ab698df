//! Lineage value object - the path of identifiers from a root to a node
//!
//! A lineage is the only addressing key the mutator understands. Root nodes
//! have a one-element lineage; the empty lineage addresses nothing.

use std::fmt;

use serde::Serialize;

use super::{AddressingScheme, Identifier};
use crate::error::{TreeMenuError, TreeMenuResult};

/// Separator used by the textual lineage form (`0/2/1`, `docs/api`)
pub const LINEAGE_SEPARATOR: &str = "/";

/// Ordered identifiers from the root ancestor down to and including a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Lineage(Vec<Identifier>);

impl Lineage {
    /// The empty ancestor lineage used for root nodes
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Return this lineage with `identifier` appended
    pub fn child(&self, identifier: Identifier) -> Self {
        let mut ids = Vec::with_capacity(self.0.len() + 1);
        ids.extend(self.0.iter().cloned());
        ids.push(identifier);
        Self(ids)
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The node's own identifier (last element)
    pub fn last(&self) -> Option<&Identifier> {
        self.0.last()
    }

    /// True when `self` addresses `other` or one of its descendants
    pub fn starts_with(&self, other: &Lineage) -> bool {
        self.0.starts_with(&other.0)
    }

    /// Field-addressed lineage from identifier field values
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(|k| Identifier::Key(k.into())).collect())
    }

    /// Textual form accepted by [`Lineage::parse`]
    pub fn to_path_string(&self) -> String {
        self.0
            .iter()
            .map(Identifier::to_segment)
            .collect::<Vec<_>>()
            .join(LINEAGE_SEPARATOR)
    }

    /// Parse a `/`-separated lineage under the given addressing scheme.
    ///
    /// Index addressing requires every segment to be a sibling index. Field
    /// addressing reads number and boolean segments as literals and
    /// everything else as text (see [`Identifier::from_segment`]). A blank
    /// input is the empty lineage.
    pub fn parse(input: &str, scheme: &AddressingScheme) -> TreeMenuResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut ids = Vec::new();
        for segment in trimmed.split(LINEAGE_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(TreeMenuError::InvalidLineage {
                    input: input.to_string(),
                    reason: "empty segment".to_string(),
                });
            }
            let id = match scheme {
                AddressingScheme::Index => {
                    let index = segment.parse::<usize>().map_err(|_| {
                        TreeMenuError::InvalidLineage {
                            input: input.to_string(),
                            reason: format!("segment '{}' is not a sibling index", segment),
                        }
                    })?;
                    Identifier::Index(index)
                }
                AddressingScheme::Field(_) => Identifier::from_segment(segment),
            };
            ids.push(id);
        }
        Ok(Self(ids))
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", parts.join(" > "))
    }
}

impl From<Vec<Identifier>> for Lineage {
    fn from(ids: Vec<Identifier>) -> Self {
        Self(ids)
    }
}

impl<const N: usize> From<[usize; N]> for Lineage {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.into_iter().map(Identifier::Index).collect())
    }
}

impl FromIterator<Identifier> for Lineage {
    fn from_iter<I: IntoIterator<Item = Identifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Lineage {
    type Item = Identifier;
    type IntoIter = std::vec::IntoIter<Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

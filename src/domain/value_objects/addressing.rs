//! Addressing scheme - the rule used to compute identifiers
//!
//! Build and mutate must use the same scheme for lineages to resolve.

use std::fmt;

/// How sibling identifiers are computed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AddressingScheme {
    /// Identify nodes by their position among siblings
    #[default]
    Index,
    /// Identify nodes by the value of the named data field
    Field(String),
}

impl AddressingScheme {
    /// Index addressing when no field is given, field addressing otherwise
    pub fn from_field(field: Option<impl Into<String>>) -> Self {
        match field {
            Some(name) => AddressingScheme::Field(name.into()),
            None => AddressingScheme::Index,
        }
    }

    /// The designated identifier field, if any
    pub fn field_name(&self) -> Option<&str> {
        match self {
            AddressingScheme::Index => None,
            AddressingScheme::Field(name) => Some(name),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, AddressingScheme::Index)
    }
}

impl fmt::Display for AddressingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressingScheme::Index => write!(f, "index"),
            AddressingScheme::Field(name) => write!(f, "field '{}'", name),
        }
    }
}

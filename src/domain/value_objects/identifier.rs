//! Identifier value object - the per-level key that tells siblings apart
//!
//! - `Index`: zero-based position among siblings
//! - `Key`: text value of the designated identifier field
//! - `Literal`: any other field value, by its compact JSON text
//! - `Missing`: the designated field is absent or null on the node
//!
//! `Key` and `Literal` never compare equal, so an `id` of `7` and an `id`
//! of `"7"` stay apart.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Per-level key distinguishing a node from its siblings
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    /// Position among siblings
    Index(usize),
    /// Text value of the designated identifier field
    Key(String),
    /// Number, boolean, array or object field value as compact JSON
    Literal(String),
    /// Designated identifier field absent on the node
    Missing,
}

impl Identifier {
    /// Build an identifier from an identifier field value.
    ///
    /// Strings become keys, `null` counts as missing and every other value
    /// is a literal held as its compact JSON encoding.
    pub fn from_field_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Identifier::Missing,
            Some(Value::String(s)) => Identifier::Key(s.clone()),
            Some(other) => Identifier::Literal(other.to_string()),
        }
    }

    /// Read one lineage segment under field addressing.
    ///
    /// A JSON number or boolean is a literal. A double-quoted segment is
    /// always a key; anything else is a key taken verbatim.
    pub fn from_segment(segment: &str) -> Self {
        if segment.len() >= 2 {
            if let Some(text) = segment
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
            {
                return Identifier::Key(text.to_string());
            }
        }
        match serde_json::from_str::<Value>(segment) {
            Ok(value @ (Value::Number(_) | Value::Bool(_))) => {
                Identifier::Literal(value.to_string())
            }
            _ => Identifier::Key(segment.to_string()),
        }
    }

    /// Textual lineage segment that [`Identifier::from_segment`] reads back
    pub fn to_segment(&self) -> String {
        match self {
            Identifier::Key(k) if k.starts_with('"') || Self::from_segment(k) != *self => {
                format!("\"{}\"", k)
            }
            other => other.to_string(),
        }
    }

    /// Create a field identifier from any string-like value
    pub fn key(key: impl Into<String>) -> Self {
        Identifier::Key(key.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Identifier::Missing)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Index(i) => write!(f, "{}", i),
            Identifier::Key(k) | Identifier::Literal(k) => write!(f, "{}", k),
            Identifier::Missing => write!(f, "<missing>"),
        }
    }
}

impl From<usize> for Identifier {
    fn from(index: usize) -> Self {
        Identifier::Index(index)
    }
}

impl From<&str> for Identifier {
    fn from(key: &str) -> Self {
        Identifier::Key(key.to_string())
    }
}

impl From<String> for Identifier {
    fn from(key: String) -> Self {
        Identifier::Key(key)
    }
}

// Index -> number, Key -> string, Literal -> its JSON value, Missing -> null
impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identifier::Index(i) => serializer.serialize_u64(*i as u64),
            Identifier::Key(k) => serializer.serialize_str(k),
            Identifier::Literal(text) => match serde_json::from_str::<Value>(text) {
                Ok(value) => value.serialize(serializer),
                Err(_) => serializer.serialize_str(text),
            },
            Identifier::Missing => serializer.serialize_none(),
        }
    }
}

//! Raw node data - the untyped hierarchical input a tree is built from
//!
//! Input arrives either as an ordered list of root records or as a single
//! record. Both normalize to a list of roots. Malformed values are absorbed
//! by defaulting: a non-list `children` is treated as absent, non-record
//! children become empty records, a non-text label is read as its text,
//! flags of any other type are read by truthiness and a non-text icon
//! class is absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::services::NodeFields;

/// Event callback fields a data record may carry; never become node state
pub const TRANSIENT_FIELDS: &[&str] = &[
    "children",
    "onClick",
    "onCheckChange",
    "onSelectChange",
    "onCollapseChange",
];

/// One input record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNodeData {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_label"
    )]
    pub label: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_children"
    )]
    pub children: Vec<RawNodeData>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flag"
    )]
    pub checked: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flag"
    )]
    pub selected: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flag"
    )]
    pub collapsed: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flag"
    )]
    pub collapsible: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flag"
    )]
    pub checkbox: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_class"
    )]
    pub expand_icon_class: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_class"
    )]
    pub collapse_icon_class: Option<String>,

    /// Every other field, in input order (identifier fields live here)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl RawNodeData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<RawNodeData>) -> Self {
        self.children = children;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl NodeFields for RawNodeData {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "label" => self.label.clone().map(Value::String),
            "checked" => self.checked.map(Value::Bool),
            "selected" => self.selected.map(Value::Bool),
            "collapsed" => self.collapsed.map(Value::Bool),
            "collapsible" => self.collapsible.map(Value::Bool),
            "checkbox" => self.checkbox.map(Value::Bool),
            "expandIconClass" => self.expand_icon_class.clone().map(Value::String),
            "collapseIconClass" => self.collapse_icon_class.clone().map(Value::String),
            _ => self.attributes.get(name).cloned(),
        }
    }
}

/// Tree input: a list of root records or a single root record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Many(Vec<RawNodeData>),
    One(Box<RawNodeData>),
}

impl RawInput {
    /// Normalize to the ordered list of root records
    pub fn into_roots(self) -> Vec<RawNodeData> {
        match self {
            RawInput::Many(roots) => roots,
            RawInput::One(root) => vec![*root],
        }
    }

    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }
}

impl Default for RawInput {
    fn default() -> Self {
        RawInput::Many(Vec::new())
    }
}

impl From<Vec<RawNodeData>> for RawInput {
    fn from(roots: Vec<RawNodeData>) -> Self {
        RawInput::Many(roots)
    }
}

impl From<RawNodeData> for RawInput {
    fn from(root: RawNodeData) -> Self {
        RawInput::One(Box::new(root))
    }
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => Some(!s.is_empty()),
        Some(Value::Number(n)) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Some(true),
    })
}

fn deserialize_class<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<RawNodeData>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).map_err(serde::de::Error::custom),
            _ => Ok(RawNodeData::default()),
        })
        .collect()
}

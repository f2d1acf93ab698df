//! Node property value object - the toggleable boolean state of a node

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeMenuError;

/// Boolean node state the mutator can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeProperty {
    /// Checkbox state
    Checked,
    /// Selection highlight
    Selected,
    /// Children hidden
    Collapsed,
}

impl NodeProperty {
    pub const ALL: [NodeProperty; 3] = [
        NodeProperty::Checked,
        NodeProperty::Selected,
        NodeProperty::Collapsed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeProperty::Checked => "checked",
            NodeProperty::Selected => "selected",
            NodeProperty::Collapsed => "collapsed",
        }
    }
}

impl fmt::Display for NodeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeProperty {
    type Err = TreeMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checked" | "check" => Ok(NodeProperty::Checked),
            "selected" | "select" => Ok(NodeProperty::Selected),
            "collapsed" | "collapse" => Ok(NodeProperty::Collapsed),
            _ => Err(TreeMenuError::UnknownProperty {
                name: s.to_string(),
            }),
        }
    }
}

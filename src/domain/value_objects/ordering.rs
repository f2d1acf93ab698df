//! Sibling ordering directives
//!
//! `SortOrder` is what the builder consumes. `SortMode` is its serializable
//! subset used by configuration files and the CLI.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Node;
use crate::error::TreeMenuError;

/// Caller-supplied sibling comparator
pub type Comparator = Arc<dyn Fn(&Node, &Node) -> Ordering + Send + Sync>;

/// How each sibling list is ordered at build time
#[derive(Clone, Default)]
pub enum SortOrder {
    /// Keep input order
    #[default]
    Unsorted,
    /// Order by label text
    ByLabel,
    /// Order with a custom comparator
    By(Comparator),
}

impl SortOrder {
    /// Wrap a comparator closure
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&Node, &Node) -> Ordering + Send + Sync + 'static,
    {
        SortOrder::By(Arc::new(compare))
    }

    pub fn is_unsorted(&self) -> bool {
        matches!(self, SortOrder::Unsorted)
    }

    /// Compare two siblings; `Unsorted` treats every pair as equal
    pub fn compare(&self, a: &Node, b: &Node) -> Ordering {
        match self {
            SortOrder::Unsorted => Ordering::Equal,
            SortOrder::ByLabel => a.label.cmp(&b.label),
            SortOrder::By(compare) => compare(a, b),
        }
    }
}

impl fmt::Debug for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Unsorted => write!(f, "Unsorted"),
            SortOrder::ByLabel => write!(f, "ByLabel"),
            SortOrder::By(_) => write!(f, "By(<comparator>)"),
        }
    }
}

/// Serializable sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    None,
    Label,
}

impl From<SortMode> for SortOrder {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::None => SortOrder::Unsorted,
            SortMode::Label => SortOrder::ByLabel,
        }
    }
}

impl From<bool> for SortMode {
    fn from(sort: bool) -> Self {
        if sort {
            SortMode::Label
        } else {
            SortMode::None
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::None => write!(f, "none"),
            SortMode::Label => write!(f, "label"),
        }
    }
}

impl FromStr for SortMode {
    type Err = TreeMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "false" | "off" => Ok(SortMode::None),
            "label" | "true" | "on" => Ok(SortMode::Label),
            _ => Err(TreeMenuError::UnknownSortOrder {
                name: s.to_string(),
            }),
        }
    }
}

//! Error types for treemenu
//!
//! Uses `thiserror` for library errors. Addressing misses during mutation are
//! not errors and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treemenu operations
pub type TreeMenuResult<T> = Result<T, TreeMenuError>;

/// Main error type for treemenu operations
#[derive(Error, Debug)]
pub enum TreeMenuError {
    /// Both a declarative children form and an explicit data form were supplied
    #[error("either declarative children or data are expected in a tree menu, but not both")]
    ConflictingInput,

    /// A lineage string could not be parsed
    #[error("invalid lineage '{input}': {reason}")]
    InvalidLineage { input: String, reason: String },

    /// A property name is not one of checked/selected/collapsed
    #[error("unknown node property '{name}' (expected checked, selected or collapsed)")]
    UnknownProperty { name: String },

    /// A sort directive name could not be parsed
    #[error("unknown sort order '{name}' (expected none or label)")]
    UnknownSortOrder { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::NodeDefaults;
use crate::domain::services::BuildConfig;
use crate::domain::value_objects::{AddressingScheme, ConfigWarning, SortMode};
use crate::error::TreeMenuResult;

use super::loader;

/// Tree construction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Data field used as the node identifier; absent means index addressing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub sort: SortMode,

    /// Whether the menu applies intents to its own snapshot
    pub stateful: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Force Unicode glyphs on or off; detected from the terminal when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode: Option<bool>,
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub tree: TreeConfig,
    pub defaults: NodeDefaults,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeMenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> TreeMenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    pub fn addressing(&self) -> AddressingScheme {
        AddressingScheme::from_field(self.tree.identifier.as_deref())
    }

    /// Build settings this configuration describes
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig::default()
            .with_addressing(self.addressing())
            .with_sort(self.tree.sort.into())
            .with_defaults(self.defaults.clone())
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

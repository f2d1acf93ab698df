//! Configuration module for treemenu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEMENU_*)
//! 3. `--config` file, or `./treemenu.toml`
//! 4. User config (`<config dir>/treemenu/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides, PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, TreeConfig};

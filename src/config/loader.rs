//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, SortMode};
use crate::error::{TreeMenuError, TreeMenuResult};

use super::types::Config;

/// Project configuration file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "treemenu.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeMenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeMenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Locate and load the configuration file, then apply environment overrides.
///
/// An explicit path must exist. Otherwise `./treemenu.toml` is tried, then
/// the user config (`<config dir>/treemenu/config.toml`), then defaults.
pub fn load_layered(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> TreeMenuResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match config_file(explicit, working_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

fn config_file(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project_config = working_dir.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return Some(project_config);
    }

    user_config_path().filter(|path| path.exists())
}

/// `<config dir>/treemenu/config.toml`, when the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treemenu").join("config.toml"))
}

/// Apply environment variable overrides (TREEMENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // TREEMENU_IDENTIFIER (empty selects index addressing)
    if let Some(field) = get_env("TREEMENU_IDENTIFIER") {
        let field = field.trim();
        config.tree.identifier = (!field.is_empty()).then(|| field.to_string());
    }

    // TREEMENU_SORT
    if let Some(sort) = get_env("TREEMENU_SORT") {
        match sort.parse::<SortMode>() {
            Ok(mode) => config.tree.sort = mode,
            Err(err) => tracing::warn!("ignoring TREEMENU_SORT: {err}"),
        }
    }

    // TREEMENU_UNICODE
    if let Some(val) = get_env("TREEMENU_UNICODE") {
        config.output.unicode = Some(val.to_lowercase() != "false" && val != "0");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "identifier",
        "sort",
        "stateful",
        "defaults",
        "collapsible",
        "collapsed",
        "checkbox",
        "checked",
        "selected",
        "expand_icon_class",
        "collapse_icon_class",
        "output",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}

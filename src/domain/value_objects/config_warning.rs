//! Configuration warning value object.

use std::path::PathBuf;

/// Unknown key found while loading a configuration file.
///
/// Loading never fails on these; the CLI prints them and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the unknown key path
    pub key: String,
    /// File the key was read from
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}

//! Tree data input
//!
//! Reads raw tree data from a file or stdin. The format follows the file
//! extension: `.yaml`/`.yml` is YAML, anything else (stdin included) JSON.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::domain::entities::RawInput;
use crate::error::TreeMenuResult;

/// Path argument that selects stdin
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            InputFormat::Yaml
        } else {
            InputFormat::Json
        }
    }

    pub fn parse(&self, content: &str) -> TreeMenuResult<RawInput> {
        let input = match self {
            InputFormat::Json => RawInput::from_json_str(content)?,
            InputFormat::Yaml => RawInput::from_yaml_str(content)?,
        };
        Ok(input)
    }
}

/// Load tree data from `path`, or from stdin when `path` is `-`
pub fn load_input(path: &Path) -> TreeMenuResult<RawInput> {
    if path == Path::new(STDIN_PATH) {
        return read_input(std::io::stdin().lock(), InputFormat::Json);
    }

    let content = fs::read_to_string(path)?;
    let format = InputFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading tree data");
    format.parse(&content)
}

/// Load tree data from any reader
pub fn read_input(mut reader: impl Read, format: InputFormat) -> TreeMenuResult<RawInput> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    format.parse(&content)
}

//! Reusable tree data.

#![allow(dead_code)]

/// A with children B and C, index addressed
pub const ABC_JSON: &str = r#"[
  {"label": "A", "children": [{"label": "B"}, {"label": "C", "checked": false}]}
]"#;

/// Docs tree addressed by `id`
pub const DOCS_JSON: &str = r#"[
  {"id": "guide", "label": "Guide", "children": [
    {"id": "intro", "label": "Intro"},
    {"id": "setup", "label": "Setup"}
  ]},
  {"id": "api", "label": "API"}
]"#;

pub const DOCS_YAML: &str = "\
- id: guide
  label: Guide
  children:
    - id: intro
      label: Intro
    - id: setup
      label: Setup
- id: api
  label: API
";

pub const UNSORTED_JSON: &str = r#"[{"label": "B"}, {"label": "A"}]"#;

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use super::Session;

pub fn cmd_lineages(session: &Session, file: Option<&Path>) -> Result<()> {
    let snapshot = session.build(file)?;
    let nodes = snapshot.walk();

    if session.json {
        let entries: Vec<_> = nodes
            .iter()
            .map(|node| json!({ "lineage": node.lineage, "label": node.label }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = nodes
        .iter()
        .map(|node| node.lineage.to_path_string().len())
        .max()
        .unwrap_or(0);
    for node in nodes {
        println!(
            "{:<width$}  {}",
            node.lineage.to_path_string(),
            node.label,
            width = width
        );
    }
    Ok(())
}

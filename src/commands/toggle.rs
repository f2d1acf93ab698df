use std::path::Path;

use anyhow::{Context, Result};
use treemenu::domain::value_objects::{Lineage, NodeProperty};
use treemenu::ui::theme::Glyphs;
use treemenu::ui::tree_menu::TreeMenu;

use super::Session;

pub fn cmd_toggle(
    session: &Session,
    file: Option<&Path>,
    property: NodeProperty,
    lineages: &[String],
) -> Result<()> {
    let mut snapshot = session.build(file)?;

    // Every lineage is validated before the first toggle.
    let parsed = lineages
        .iter()
        .map(|text| Lineage::parse(text, snapshot.addressing()))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --lineage")?;

    for lineage in &parsed {
        let outcome = snapshot.toggle(lineage, property);
        if outcome.is_miss() && !session.json {
            eprintln!(
                "{} lineage '{}' matched no node; nothing toggled",
                Glyphs::new(session.unicode).warning,
                lineage.to_path_string()
            );
        }
    }

    if session.json {
        println!("{}", serde_json::to_string_pretty(&snapshot.to_raw())?);
        return Ok(());
    }

    print!("{}", TreeMenu::new(snapshot).render(session.unicode));
    Ok(())
}

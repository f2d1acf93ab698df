use std::path::Path;

use anyhow::Result;
use treemenu::ui::tree_menu::TreeMenu;

use super::Session;

pub fn cmd_show(session: &Session, file: Option<&Path>) -> Result<()> {
    let snapshot = session.build(file)?;

    if session.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print!("{}", TreeMenu::new(snapshot).render(session.unicode));
    Ok(())
}

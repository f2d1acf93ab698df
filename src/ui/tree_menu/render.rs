//! Plain-text outline rendering.

use crate::ui::theme::Glyphs;

use super::rows::VisibleRow;

/// Render a single row to a string
pub fn render_row(row: &VisibleRow, glyphs: &Glyphs) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if row.selected {
        format!("{} ", glyphs.cursor)
    } else {
        String::from("  ")
    };

    // Expansion icon (only for nodes with children)
    let expand_icon = if !row.has_children {
        String::from("  ")
    } else if row.collapsed {
        format!("{} ", glyphs.collapse)
    } else {
        format!("{} ", glyphs.expand)
    };

    let check_icon = match (row.checkbox, row.checked) {
        (false, _) => String::new(),
        (true, true) => format!("{} ", glyphs.checked),
        (true, false) => format!("{} ", glyphs.unchecked),
    };

    format!(
        "{}{}{}{}{}",
        cursor, indent, expand_icon, check_icon, row.label
    )
}

/// Render rows as an outline, one line per row
pub fn render_outline(rows: &[VisibleRow], unicode: bool) -> String {
    let glyphs = Glyphs::new(unicode);
    let mut out = String::new();
    for row in rows {
        out.push_str(&render_row(row, &glyphs));
        out.push('\n');
    }
    out
}

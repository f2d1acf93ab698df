//! Design tokens for tree output.
//!
//! All glyphs printed by the outline renderer come from this module, with an
//! ASCII twin for terminals that cannot show Unicode.

pub mod icons {
    // Checkbox states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const CURSOR: &str = ">";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const CURSOR: &str = ">";
    pub const WARNING: &str = "[WARN]";
}

/// Glyph set chosen once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub cursor: &'static str,
    pub warning: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                checked: icons::CHECKED,
                unchecked: icons::UNCHECKED,
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                cursor: icons::CURSOR,
                warning: icons::WARNING,
            }
        } else {
            Self {
                checked: icons_ascii::CHECKED,
                unchecked: icons_ascii::UNCHECKED,
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                cursor: icons_ascii::CURSOR,
                warning: icons_ascii::WARNING,
            }
        }
    }
}

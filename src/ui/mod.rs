//! User-facing output: the tree menu adapter, glyph theme, terminal
//! detection and warning printing.

pub mod output;
pub mod terminal;
pub mod theme;
pub mod tree_menu;

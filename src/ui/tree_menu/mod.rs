//! Tree menu view adapter
//!
//! The boundary between the tree engine and whatever draws it: intents go
//! in, visible rows and an outline come out.

mod intent;
mod menu;
mod render;
mod rows;

pub use intent::{IntentHandlers, IntentKind, LineageCallback, TreeIntent};
pub use menu::{LabelFilter, TreeMenu, TreeMenuBuilder};
pub use render::{render_outline, render_row};
pub use rows::{visible_rows, VisibleRow};

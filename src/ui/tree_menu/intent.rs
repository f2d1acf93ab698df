//! Intents reported by the view layer
//!
//! A view never mutates nodes. It reports what the user asked for as a
//! lineage plus an intent kind, and the menu host decides what to do.

use std::fmt;

use crate::domain::entities::Node;
use crate::domain::value_objects::{Lineage, NodeProperty};

/// What the user did to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// Plain click on a node without checkbox or selection handling
    Click,
    /// Checkbox should flip
    CheckChange,
    /// Selection should flip
    SelectChange,
    /// Children should be shown or hidden
    CollapseChange,
}

impl IntentKind {
    /// Property a stateful menu toggles for this intent
    pub fn property(&self) -> Option<NodeProperty> {
        match self {
            IntentKind::Click => None,
            IntentKind::CheckChange => Some(NodeProperty::Checked),
            IntentKind::SelectChange => Some(NodeProperty::Selected),
            IntentKind::CollapseChange => Some(NodeProperty::Collapsed),
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::Click => write!(f, "click"),
            IntentKind::CheckChange => write!(f, "check change"),
            IntentKind::SelectChange => write!(f, "select change"),
            IntentKind::CollapseChange => write!(f, "collapse change"),
        }
    }
}

/// A lineage-bearing intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeIntent {
    pub lineage: Lineage,
    pub kind: IntentKind,
}

impl TreeIntent {
    pub fn new(lineage: Lineage, kind: IntentKind) -> Self {
        Self { lineage, kind }
    }
}

/// Callback receiving the full lineage of the affected node
pub type LineageCallback = Box<dyn FnMut(&Lineage)>;

/// Per-menu intent callbacks; unset callbacks do nothing
#[derive(Default)]
pub struct IntentHandlers {
    pub on_click: Option<LineageCallback>,
    pub on_check_change: Option<LineageCallback>,
    pub on_select_change: Option<LineageCallback>,
    pub on_collapse_change: Option<LineageCallback>,
}

impl IntentHandlers {
    pub fn has_select_handler(&self) -> bool {
        self.on_select_change.is_some()
    }

    /// Resolve a click on `node` into the intent it stands for.
    ///
    /// Checkbox nodes turn clicks into check changes. Otherwise a configured
    /// select handler turns them into select changes. Anything else stays a
    /// plain click.
    pub fn resolve_click(&self, node: &Node) -> IntentKind {
        if node.checkbox {
            IntentKind::CheckChange
        } else if self.has_select_handler() {
            IntentKind::SelectChange
        } else {
            IntentKind::Click
        }
    }

    /// Invoke the callback registered for `kind`, if any
    pub fn notify(&mut self, kind: IntentKind, lineage: &Lineage) {
        let handler = match kind {
            IntentKind::Click => self.on_click.as_mut(),
            IntentKind::CheckChange => self.on_check_change.as_mut(),
            IntentKind::SelectChange => self.on_select_change.as_mut(),
            IntentKind::CollapseChange => self.on_collapse_change.as_mut(),
        };
        if let Some(handler) = handler {
            handler(lineage);
        }
    }
}

impl fmt::Debug for IntentHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_check_change", &self.on_check_change.is_some())
            .field("on_select_change", &self.on_select_change.is_some())
            .field("on_collapse_change", &self.on_collapse_change.is_some())
            .finish()
    }
}

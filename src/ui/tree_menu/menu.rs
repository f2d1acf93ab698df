//! Tree menu host
//!
//! Owns a snapshot and turns view intents into state changes and callbacks.
//! A stateful menu toggles the intent's property through the mutator before
//! calling the handler; a stateless menu only reports and leaves the owner
//! to rebuild from its own data.

use std::fmt;

use crate::domain::entities::{DeclarativeNode, NodeDefaults, RawInput, TreeSnapshot};
use crate::domain::services::{build, BuildConfig, Mutation, TreeSource};
use crate::domain::value_objects::{AddressingScheme, Lineage, SortOrder};
use crate::error::TreeMenuResult;

use super::intent::{IntentHandlers, IntentKind, LineageCallback, TreeIntent};
use super::render::render_outline;
use super::rows::{visible_rows, VisibleRow};

/// Display-only transformation of a node label
pub type LabelFilter = Box<dyn Fn(&str) -> String>;

pub struct TreeMenu {
    snapshot: TreeSnapshot,
    stateful: bool,
    handlers: IntentHandlers,
    label_filter: Option<LabelFilter>,
}

impl TreeMenu {
    /// Stateless menu over an already built snapshot
    pub fn new(snapshot: TreeSnapshot) -> Self {
        Self {
            snapshot,
            stateful: false,
            handlers: IntentHandlers::default(),
            label_filter: None,
        }
    }

    pub fn builder() -> TreeMenuBuilder {
        TreeMenuBuilder::default()
    }

    pub fn snapshot(&self) -> &TreeSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> TreeSnapshot {
        self.snapshot
    }

    pub fn is_stateful(&self) -> bool {
        self.stateful
    }

    /// Replace the snapshot, e.g. after the owner rebuilt from new data
    pub fn replace_snapshot(&mut self, snapshot: TreeSnapshot) {
        self.snapshot = snapshot;
    }

    /// Intent a click on the node at `lineage` stands for, `None` if the
    /// lineage addresses no node
    pub fn resolve_click(&self, lineage: &Lineage) -> Option<IntentKind> {
        self.snapshot
            .find(lineage)
            .map(|node| self.handlers.resolve_click(node))
    }

    /// Handle a click on the node at `lineage`
    pub fn click(&mut self, lineage: &Lineage) -> Option<Mutation> {
        let Some(kind) = self.resolve_click(lineage) else {
            tracing::debug!(lineage = %lineage, "click on unknown lineage ignored");
            return None;
        };
        self.dispatch(TreeIntent::new(lineage.clone(), kind))
    }

    /// Apply an intent: toggle when stateful, then notify the handler.
    ///
    /// Returns the mutation report when a toggle was applied. Collapse
    /// intents on childless nodes are ignored entirely.
    pub fn dispatch(&mut self, intent: TreeIntent) -> Option<Mutation> {
        let TreeIntent { lineage, kind } = intent;

        if kind == IntentKind::CollapseChange {
            let has_children = self
                .snapshot
                .find(&lineage)
                .is_some_and(|node| node.has_children());
            if !has_children {
                tracing::debug!(lineage = %lineage, "collapse on childless node ignored");
                return None;
            }
        }

        let mutation = match kind.property() {
            Some(property) if self.stateful => Some(self.snapshot.toggle(&lineage, property)),
            _ => None,
        };

        tracing::debug!(lineage = %lineage, intent = %kind, "dispatch");
        self.handlers.notify(kind, &lineage);
        mutation
    }

    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = visible_rows(&self.snapshot);
        if let Some(filter) = &self.label_filter {
            for row in &mut rows {
                row.label = filter(&row.label);
            }
        }
        rows
    }

    /// Render the visible rows as a text outline
    pub fn render(&self, unicode: bool) -> String {
        render_outline(&self.visible_rows(), unicode)
    }
}

impl fmt::Debug for TreeMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMenu")
            .field("snapshot", &self.snapshot)
            .field("stateful", &self.stateful)
            .field("handlers", &self.handlers)
            .field("label_filter", &self.label_filter.is_some())
            .finish()
    }
}

/// Builder for [`TreeMenu`]
#[derive(Default)]
pub struct TreeMenuBuilder {
    source: TreeSource,
    config: BuildConfig,
    stateful: bool,
    handlers: IntentHandlers,
    label_filter: Option<LabelFilter>,
}

impl TreeMenuBuilder {
    pub fn data(mut self, data: impl Into<RawInput>) -> Self {
        self.source = self.source.with_data(data);
        self
    }

    /// Declared child nodes; conflicts with [`TreeMenuBuilder::data`]
    pub fn children(mut self, children: impl IntoIterator<Item = DeclarativeNode>) -> Self {
        self.source = self.source.with_children(children.into_iter().collect());
        self
    }

    /// Address nodes by the named data field instead of sibling position
    pub fn identifier(mut self, field: impl Into<String>) -> Self {
        self.config = self.config.with_identifier(field);
        self
    }

    pub fn addressing(mut self, addressing: AddressingScheme) -> Self {
        self.config = self.config.with_addressing(addressing);
        self
    }

    pub fn sort(mut self, sort: impl Into<SortOrder>) -> Self {
        self.config = self.config.with_sort(sort.into());
        self
    }

    pub fn defaults(mut self, defaults: NodeDefaults) -> Self {
        self.config = self.config.with_defaults(defaults);
        self
    }

    /// Replace the whole build configuration
    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stateful(mut self, stateful: bool) -> Self {
        self.stateful = stateful;
        self
    }

    pub fn label_filter(mut self, filter: impl Fn(&str) -> String + 'static) -> Self {
        self.label_filter = Some(Box::new(filter));
        self
    }

    pub fn on_click(mut self, handler: impl FnMut(&Lineage) + 'static) -> Self {
        self.handlers.on_click = Some(boxed(handler));
        self
    }

    pub fn on_check_change(mut self, handler: impl FnMut(&Lineage) + 'static) -> Self {
        self.handlers.on_check_change = Some(boxed(handler));
        self
    }

    pub fn on_select_change(mut self, handler: impl FnMut(&Lineage) + 'static) -> Self {
        self.handlers.on_select_change = Some(boxed(handler));
        self
    }

    pub fn on_collapse_change(mut self, handler: impl FnMut(&Lineage) + 'static) -> Self {
        self.handlers.on_collapse_change = Some(boxed(handler));
        self
    }

    /// Build the snapshot and the menu around it
    pub fn build(self) -> TreeMenuResult<TreeMenu> {
        let snapshot = build(self.source, &self.config)?;
        Ok(TreeMenu {
            snapshot,
            stateful: self.stateful,
            handlers: self.handlers,
            label_filter: self.label_filter,
        })
    }
}

fn boxed(handler: impl FnMut(&Lineage) + 'static) -> LineageCallback {
    Box::new(handler)
}

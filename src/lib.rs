//! treemenu - lineage-addressed tree construction and state mutation
//!
//! Turns hierarchical data into a tree of nodes, each carrying a lineage
//! (the identifiers from its root down to itself), and toggles a node's
//! checked, selected or collapsed state by lineage with the new value
//! cascading to the whole subtree.
//!
//! ```
//! use treemenu::{build_data, mutate, BuildConfig, Lineage, NodeProperty, RawNodeData};
//!
//! let tree = build_data(
//!     vec![RawNodeData::new("A").with_children(vec![RawNodeData::new("B")])],
//!     &BuildConfig::default(),
//! );
//! let tree = mutate(&tree, &Lineage::from([0]), NodeProperty::Checked);
//! assert_eq!(tree.checked_lineages(), vec![Lineage::from([0]), Lineage::from([0, 0])]);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{DeclarativeNode, Node, NodeDefaults, RawInput, RawNodeData, TreeSnapshot};
pub use domain::services::{
    build, build_data, build_lineage, identify, mutate, toggle, BuildConfig, Mutation, TreeSource,
};
pub use domain::value_objects::{
    AddressingScheme, BuildWarning, Identifier, Lineage, NodeProperty, SortMode, SortOrder,
};
pub use error::{TreeMenuError, TreeMenuResult};
pub use ui::tree_menu::{IntentHandlers, IntentKind, TreeIntent, TreeMenu, TreeMenuBuilder};

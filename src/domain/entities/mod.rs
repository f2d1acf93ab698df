//! Domain Entities
//!
//! - `RawNodeData` / `RawInput` - untyped input records
//! - `DeclarativeNode` - nodes declared in code
//! - `Node` / `NodeDefaults` - built nodes and menu-wide defaults
//! - `TreeSnapshot` - one built forest

mod declarative;
mod node;
mod raw_node;
mod snapshot;

pub use declarative::{extract_data, DeclarativeNode};
pub use node::{Node, NodeDefaults};
pub use raw_node::{RawInput, RawNodeData, TRANSIENT_FIELDS};
pub use snapshot::TreeSnapshot;

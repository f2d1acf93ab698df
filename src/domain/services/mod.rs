//! Domain Services
//!
//! Pure tree logic with no I/O:
//! - `identity` - identifiers and lineages
//! - `builder` - raw data to `TreeSnapshot`
//! - `mutator` - lineage-addressed toggles with subtree cascade

mod builder;
mod identity;
mod mutator;

pub use builder::{build, build_data, BuildConfig, TreeSource};
pub use identity::{build_lineage, identify, NodeFields};
pub use mutator::{mutate, toggle, Mutation};

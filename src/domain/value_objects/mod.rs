//! Domain Value Objects
//!
//! Immutable value types: identifiers, lineages, toggleable properties,
//! addressing and ordering directives, and non-fatal warnings.

mod addressing;
mod build_warning;
mod config_warning;
mod identifier;
mod lineage;
mod ordering;
mod property;

pub use addressing::AddressingScheme;
pub use build_warning::BuildWarning;
pub use config_warning::ConfigWarning;
pub use identifier::Identifier;
pub use lineage::{Lineage, LINEAGE_SEPARATOR};
pub use ordering::{Comparator, SortMode, SortOrder};
pub use property::NodeProperty;

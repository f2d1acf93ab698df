//! Domain Layer
//!
//! The tree engine: pure logic without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Identifiers, lineages, properties, directives
//! - `entities/` - Raw input, built nodes, snapshots
//! - `services/` - Identity, builder, mutator
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Loading data and configuration happens in outer layers
//! 2. **Persistent snapshots** - A mutation never changes a snapshot someone
//!    else holds
//! 3. **One addressing rule** - Build, lookup and mutate resolve identifiers
//!    through the same function

pub mod entities;
pub mod services;
pub mod value_objects;

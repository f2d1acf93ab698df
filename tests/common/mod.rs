//! Common test utilities for treemenu CLI and scenario tests.
//!
//! - `TestEnv`: isolated working and config directories plus a CLI runner
//! - Fixtures: reusable tree data

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;

//! Common test utilities shared by the integration tests.
//!
//! - Project fixtures on disk
//! - In-memory configuration sources
//! - Custom assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

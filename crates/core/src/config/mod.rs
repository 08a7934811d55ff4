//! Configuration loading and agent record sources.
//!
//! [`loader::load_config`] reads the `.agent-forge/` project directory and
//! [`models::AppConfig::config_source`] turns it into a [`ConfigSource`]
//! the factory can query by agent identifier.

pub mod error;
pub mod loader;
pub mod models;
pub mod source;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_config;
pub use models::AppConfig;
pub use source::{ConfigSource, DirectoryConfigSource, LayeredConfigSource, StaticConfigSource};

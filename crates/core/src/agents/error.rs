//! Error types for agent construction.

use crate::config::error::ConfigError;
use crate::params::ConstructorError;
use thiserror::Error;

/// Errors that can occur while building or describing an agent.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// No configuration exists for the identifier.
    #[error("No configuration found for agent: {agent_id}")]
    NotFound { agent_id: String },

    /// A model or tool type is unknown, or known but not implemented.
    #[error("Unsupported {category} type: {name}")]
    UnsupportedType { category: &'static str, name: String },

    /// The agent constructor rejected the filtered arguments.
    #[error("Failed to create agent {agent_id}: {message}")]
    ConstructionFailed { agent_id: String, message: String },

    /// The model backend rejected its settings.
    #[error("Failed to create model: {0}")]
    ModelConstruction(#[source] ConstructorError),

    /// A nested configuration block has the wrong shape.
    #[error("Invalid {key} block: {reason}")]
    InvalidBlock { key: &'static str, reason: String },

    /// The configuration source failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Type alias for Result with FactoryError.
pub type FactoryResult<T> = Result<T, FactoryError>;

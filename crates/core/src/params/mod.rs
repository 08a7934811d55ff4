//! Configuration-to-constructor mapping.
//!
//! A target type declares its formal parameters through [`Constructor`].
//! Loosely-typed configuration records are then mapped onto those
//! parameters in two stages:
//!
//! 1. [`translate`] copies configured keys across a fixed translation table,
//!    but only under names the target declares.
//! 2. [`filter`] drops null values and anything the target does not declare.
//!
//! Unknown configuration keys are silently omitted rather than rejected, so
//! the configuration store and the constructor signature may drift apart.
//! Required-parameter violations surface only when the constructor itself
//! rejects the arguments.

pub mod arguments;
pub mod descriptor;
pub mod mapping;

pub use arguments::{Argument, Arguments};
pub use descriptor::{ParameterDescriptor, ParameterSet};
pub use mapping::{filter, translate};

use thiserror::Error;

/// Errors raised by a target constructor when it rejects its arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructorError {
    #[error("missing required parameter '{0}'")]
    MissingRequired(String),

    #[error("invalid value for parameter '{name}': expected {expected}")]
    InvalidValue { name: String, expected: &'static str },

    #[error("unexpected parameter '{0}'")]
    UnexpectedParameter(String),

    #[error("duplicate tool name '{0}'")]
    DuplicateTool(String),
}

/// A type that can be built from a filtered keyword argument mapping.
///
/// `parameters()` is the allow-list: every key the mapper produces is one
/// of the names it returns.
pub trait Constructor {
    type Output;

    /// Describe the formal parameters accepted by [`Constructor::construct`].
    fn parameters() -> ParameterSet;

    /// Build the output from arguments restricted to [`Constructor::parameters`].
    fn construct(args: Arguments) -> Result<Self::Output, ConstructorError>;
}

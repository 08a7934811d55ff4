//! Agent construction and management.
//!
//! This module provides the [`Agent`] type, the [`AgentFactory`] that maps
//! configuration records onto its constructor, and the [`AgentManager`]
//! that caches built instances.

pub mod agent;
pub mod cache;
pub mod error;
pub mod factory;
pub mod manager;

pub use agent::Agent;
pub use cache::AgentCache;
pub use error::{FactoryError, FactoryResult};
pub use factory::{AgentFactory, AGENT_PARAM_MAPPING};
pub use manager::AgentManager;

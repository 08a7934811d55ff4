//! # af-protocol
//!
//! Core protocol definitions and data models for agent-forge.
//!
//! This crate defines all shared data structures used for:
//! - Agent configuration records and the summaries derived from them
//! - Project-wide settings from `.agent-forge/config.toml`
//! - Request and response payloads of the HTTP entrypoint
//!
//! ## Modules
//!
//! - [`agent_models`]: Configuration records and agent summaries
//! - [`config_models`]: Global configuration from config.toml
//! - [`invocation_models`]: HTTP invocation payloads
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json and ts-rs
//! - TypeScript generation: Wire types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other agent-forge crates

pub mod agent_models;
pub mod config_models;
pub mod invocation_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use invocation_models::*;

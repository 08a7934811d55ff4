//! # af-core
//!
//! Configuration-driven agent construction for agent-forge.
//!
//! This crate provides:
//! - A mapper from loosely-typed configuration records onto declared
//!   constructor parameters
//! - Model and tool factories keyed by configuration type tags
//! - An agent factory and a caching agent manager
//! - Configuration sources backed by the `.agent-forge/` directory and the
//!   embedded sample agents
//!
//! ## Modules
//!
//! - [`params`]: Parameter descriptors, arguments and the translate/filter mapper
//! - [`models`]: Model backends
//! - [`tools`]: Tools and tool providers
//! - [`agents`]: Agent type, factory and manager
//! - [`config`]: Configuration loading and sources
//! - [`init`]: Project scaffolding

pub mod agents;
pub mod config;
pub mod init;
pub mod models;
pub mod params;
pub mod tools;

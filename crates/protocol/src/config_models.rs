//! Global configuration models for `.agent-forge/config.toml`.
//!
//! This module defines the structure of the global configuration file that
//! controls project-wide settings for agent-forge.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Represents global settings from `.agent-forge/config.toml`.
///
/// # Example
///
/// ```toml
/// # .agent-forge/config.toml
/// include_builtin_agents = true
///
/// [server]
/// host = "0.0.0.0"
/// port = 8080
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// Also serve the built-in sample agents next to the project's own.
    ///
    /// Project agents shadow built-in agents with the same identifier.
    #[serde(default = "default_include_builtin_agents")]
    pub include_builtin_agents: bool,

    /// Settings for the HTTP entrypoint.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            include_builtin_agents: default_include_builtin_agents(),
            server: ServerConfig::default(),
        }
    }
}

fn default_include_builtin_agents() -> bool {
    true
}

/// Bind address of the HTTP entrypoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

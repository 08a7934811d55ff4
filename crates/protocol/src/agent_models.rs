//! Agent configuration records and agent summaries.
//!
//! Agent configurations are loosely typed: a record is a plain JSON object
//! fetched by identifier from a configuration source. No schema is enforced
//! and any key may be absent.
//!
//! # Example
//!
//! ```yaml
//! name: data-analyst
//! description: Data Analysis Agent
//! system_prompt: You are a data analysis expert.
//! model_config:
//!   type: bedrock
//!   temperature: 0.1
//! tools_config:
//!   a2a_client:
//!     known_agent_urls: ["https://analytics-agent.example.com"]
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A loosely-typed agent configuration record.
///
/// An empty record means "no configuration found".
pub type ConfigRecord = serde_json::Map<String, serde_json::Value>;

/// Record key holding the nested model configuration block.
pub const MODEL_CONFIG_KEY: &str = "model_config";

/// Record key holding the nested tools configuration block.
pub const TOOLS_CONFIG_KEY: &str = "tools_config";

/// Record key holding the agent's system prompt.
pub const SYSTEM_PROMPT_KEY: &str = "system_prompt";

/// Key inside `model_config` selecting the model backend.
pub const MODEL_TYPE_KEY: &str = "type";

/// Basic, non-sensitive information about an agent.
///
/// Produced from a configuration record without constructing the agent.
/// The full system prompt and any credentials are never included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentSummary {
    /// Identifier the configuration was looked up by.
    pub agent_id: String,

    /// Display name; falls back to `agent_id`.
    pub name: String,

    /// Human-readable description; falls back to a placeholder.
    pub description: String,

    /// Declared model backend tag (e.g. "bedrock"), or "unknown".
    pub model_type: String,

    /// Whether the record carries a non-empty tools configuration.
    pub has_tools: bool,

    /// Leading part of the system prompt, with "..." appended when cut.
    pub system_prompt_preview: String,
}

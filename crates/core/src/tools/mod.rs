//! Tools (invocable capabilities) and the providers that build them.
//!
//! A record's `tools_config` block maps provider keys to provider-specific
//! settings:
//!
//! ```yaml
//! tools_config:
//!   a2a_client:
//!     known_agent_urls: ["https://analytics-agent.example.com"]
//! ```
//!
//! Providers are selected by [`ToolKind`]. Only the A2A client provider is
//! implemented; `mcp_tools` and `custom_tools` are recognized and rejected.

pub mod a2a;

pub use a2a::A2AClientToolProvider;

use crate::agents::FactoryError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Name, description and JSON input schema of a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid tool input: {0}")]
    InvalidInput(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote agent returned an error: {0}")]
    Remote(String),
}

/// A capability an agent may call.
#[async_trait]
pub trait Tool: Send + Sync {
    fn spec(&self) -> ToolSpec;

    async fn invoke(&self, input: Value) -> Result<Value, ToolError>;
}

/// A source of tools built from one `tools_config` entry.
pub trait ToolProvider {
    fn tools(&self) -> Vec<Arc<dyn Tool>>;
}

/// Known `tools_config` provider keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    A2aClient,
    Mcp,
    Custom,
}

impl ToolKind {
    /// Providers in the order their tools are assembled.
    pub const ALL: [ToolKind; 3] = [ToolKind::A2aClient, ToolKind::Mcp, ToolKind::Custom];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::A2aClient => "a2a_client",
            Self::Mcp => "mcp_tools",
            Self::Custom => "custom_tools",
        }
    }
}

/// Build all tools declared by a record's `tools_config` block.
///
/// A missing, null or empty block yields no tools. Unknown provider keys
/// are skipped with a warning.
pub fn create_tools_from_config(tools_config: &Value) -> Result<Vec<Arc<dyn Tool>>, FactoryError> {
    let block = match tools_config {
        Value::Null => return Ok(Vec::new()),
        Value::Object(block) => block,
        _ => {
            return Err(FactoryError::InvalidBlock {
                key: af_protocol::TOOLS_CONFIG_KEY,
                reason: "expected an object".to_string(),
            })
        }
    };

    for key in block.keys() {
        if ToolKind::from_key(key).is_none() {
            warn!(key = key.as_str(), "Ignoring unknown tool provider");
        }
    }

    let mut tools: Vec<Arc<dyn Tool>> = Vec::new();

    for kind in ToolKind::ALL {
        let Some(settings) = block.get(kind.key()) else {
            continue;
        };

        match kind {
            ToolKind::A2aClient => {
                let urls = known_agent_urls(settings)?;
                if urls.is_empty() {
                    debug!("A2A client configured without agent URLs, no tools added");
                    continue;
                }
                let provider = A2AClientToolProvider::new(urls);
                tools.extend(provider.tools());
            }
            ToolKind::Mcp | ToolKind::Custom => {
                return Err(FactoryError::UnsupportedType {
                    category: "tool",
                    name: kind.key().to_string(),
                });
            }
        }
    }

    Ok(tools)
}

fn known_agent_urls(settings: &Value) -> Result<Vec<String>, FactoryError> {
    let invalid = || FactoryError::InvalidBlock {
        key: af_protocol::TOOLS_CONFIG_KEY,
        reason: "a2a_client.known_agent_urls must be a list of strings".to_string(),
    };

    match settings.get("known_agent_urls") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect(),
        Some(_) => Err(invalid()),
    }
}

/// JSON truthiness of a configuration value: null, `false`, `0`, `""`,
/// `[]` and `{}` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

//! Payloads of the HTTP entrypoint.
//!
//! The entrypoint mirrors the agent-runtime contract: a JSON payload with a
//! `prompt` is posted to `/invocations` and a JSON object with a `response`
//! comes back.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Prompt used when an invocation payload carries none.
pub const DEFAULT_PROMPT: &str = "Hello, world!";

/// Body of `POST /invocations`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct InvocationRequest {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Agent to construct (or reuse from the cache) for this invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

/// Body returned from `POST /invocations`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct InvocationResponse {
    pub response: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    /// Names of the tools the serving agent was built with.
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ErrorResponse {
    pub error: String,
}

//! Agent-to-agent (A2A) client tools.
//!
//! The provider is configured with the URLs of peer agents and exposes
//! three tools to the agent that owns it: discovering a peer's agent card,
//! listing the configured peers, and sending a text message to a peer over
//! JSON-RPC.

use crate::tools::{Tool, ToolError, ToolProvider, ToolSpec};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Path of the agent card relative to a peer's base URL.
pub const AGENT_CARD_PATH: &str = ".well-known/agent.json";

#[derive(Debug)]
struct A2AClient {
    http: reqwest::Client,
    known_agent_urls: Vec<String>,
}

impl A2AClient {
    fn card_url(base: &str) -> String {
        format!("{}/{AGENT_CARD_PATH}", base.trim_end_matches('/'))
    }

    async fn fetch_card(&self, url: &str) -> Result<Value, ToolError> {
        let card_url = Self::card_url(url);
        debug!(url = card_url.as_str(), "Fetching A2A agent card");
        let card = self
            .http
            .get(&card_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(card)
    }

    async fn send_message(&self, url: &str, text: &str) -> Result<Value, ToolError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": Uuid::new_v4().to_string(),
            "method": "message/send",
            "params": {
                "message": {
                    "kind": "message",
                    "role": "user",
                    "messageId": Uuid::new_v4().to_string(),
                    "parts": [{ "kind": "text", "text": text }],
                }
            }
        });

        info!(url, "Sending A2A message");
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        if let Some(error) = response.get("error") {
            return Err(ToolError::Remote(error.to_string()));
        }

        Ok(response.get("result").cloned().unwrap_or(Value::Null))
    }
}

/// Builds the A2A client tools for a fixed set of peer agents.
#[derive(Debug, Clone)]
pub struct A2AClientToolProvider {
    client: Arc<A2AClient>,
}

impl A2AClientToolProvider {
    pub fn new(known_agent_urls: Vec<String>) -> Self {
        Self {
            client: Arc::new(A2AClient {
                http: reqwest::Client::new(),
                known_agent_urls,
            }),
        }
    }

    pub fn known_agent_urls(&self) -> &[String] {
        &self.client.known_agent_urls
    }
}

impl ToolProvider for A2AClientToolProvider {
    fn tools(&self) -> Vec<Arc<dyn Tool>> {
        vec![
            Arc::new(DiscoverAgent(Arc::clone(&self.client))),
            Arc::new(ListDiscoveredAgents(Arc::clone(&self.client))),
            Arc::new(SendMessage(Arc::clone(&self.client))),
        ]
    }
}

struct DiscoverAgent(Arc<A2AClient>);

#[async_trait]
impl Tool for DiscoverAgent {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "a2a_discover_agent".to_string(),
            description: "Fetch the agent card of an A2A agent to learn its skills.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": { "url": { "type": "string" } },
                "required": ["url"]
            }),
        }
    }

    async fn invoke(&self, input: Value) -> Result<Value, ToolError> {
        let url = required_str(&input, "url")?;
        let card = self.0.fetch_card(url).await?;
        Ok(json!({ "url": url, "agent_card": card }))
    }
}

struct ListDiscoveredAgents(Arc<A2AClient>);

#[async_trait]
impl Tool for ListDiscoveredAgents {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "a2a_list_discovered_agents".to_string(),
            description: "List the A2A agents this agent can delegate to.".to_string(),
            input_schema: json!({ "type": "object", "properties": {} }),
        }
    }

    async fn invoke(&self, _input: Value) -> Result<Value, ToolError> {
        Ok(json!({
            "agents": self.0.known_agent_urls,
            "total_count": self.0.known_agent_urls.len(),
        }))
    }
}

struct SendMessage(Arc<A2AClient>);

#[async_trait]
impl Tool for SendMessage {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "a2a_send_message".to_string(),
            description: "Send a text message to an A2A agent and return its reply.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "message_text": { "type": "string" },
                    "target_agent_url": { "type": "string" }
                },
                "required": ["message_text", "target_agent_url"]
            }),
        }
    }

    async fn invoke(&self, input: Value) -> Result<Value, ToolError> {
        let text = required_str(&input, "message_text")?;
        let url = required_str(&input, "target_agent_url")?;
        let result = self.0.send_message(url, text).await?;
        Ok(json!({ "target_agent_url": url, "response": result }))
    }
}

fn required_str<'a>(input: &'a Value, field: &str) -> Result<&'a str, ToolError> {
    input
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::InvalidInput(format!("'{field}' must be a string")))
}

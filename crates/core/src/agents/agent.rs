//! The agent type built by the factory.

use crate::models::{BedrockModel, Model};
use crate::params::{Arguments, Constructor, ConstructorError, ParameterDescriptor, ParameterSet};
use crate::tools::{Tool, ToolError};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_AGENT_NAME: &str = "Agent";
pub const DEFAULT_AGENT_ID: &str = "default";

/// A language-model backend combined with a system prompt and tools.
pub struct Agent {
    model: Arc<dyn Model>,
    tools: Vec<Arc<dyn Tool>>,
    system_prompt: Option<String>,
    name: String,
    agent_id: String,
    description: Option<String>,
    record_direct_tool_call: bool,
    load_tools_from_directory: bool,
    trace_attributes: Map<String, Value>,
    state: Map<String, Value>,
}

impl Agent {
    pub fn model(&self) -> &Arc<dyn Model> {
        &self.model
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.spec().name).collect()
    }

    pub fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.spec().name == name)
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn record_direct_tool_call(&self) -> bool {
        self.record_direct_tool_call
    }

    pub fn load_tools_from_directory(&self) -> bool {
        self.load_tools_from_directory
    }

    pub fn trace_attributes(&self) -> &Map<String, Value> {
        &self.trace_attributes
    }

    pub fn state(&self) -> &Map<String, Value> {
        &self.state
    }

    /// Call one of the agent's tools directly, bypassing the model.
    pub async fn call_tool(&self, name: &str, input: Value) -> Result<Value, ToolError> {
        let tool = self
            .tool(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.invoke(input).await
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("agent_id", &self.agent_id)
            .field("name", &self.name)
            .field("model", &self.model)
            .field("tools", &self.tool_names())
            .field("record_direct_tool_call", &self.record_direct_tool_call)
            .finish_non_exhaustive()
    }
}

impl Constructor for Agent {
    type Output = Agent;

    fn parameters() -> ParameterSet {
        ParameterSet::new()
            .with(ParameterDescriptor::optional("model"))
            .with(ParameterDescriptor::optional("tools"))
            .with(ParameterDescriptor::optional("system_prompt"))
            .with(ParameterDescriptor::with_default("name", json!(DEFAULT_AGENT_NAME)))
            .with(ParameterDescriptor::with_default("agent_id", json!(DEFAULT_AGENT_ID)))
            .with(ParameterDescriptor::optional("description"))
            .with(ParameterDescriptor::with_default("record_direct_tool_call", json!(true)))
            .with(ParameterDescriptor::with_default("load_tools_from_directory", json!(false)))
            .with(ParameterDescriptor::optional("trace_attributes"))
            .with(ParameterDescriptor::optional("state"))
    }

    fn construct(mut args: Arguments) -> Result<Self::Output, ConstructorError> {
        Self::parameters().check_required(&args)?;

        let model = match args.take_model("model")? {
            Some(model) => model,
            None => Arc::new(BedrockModel::default()),
        };

        let tools = args.take_tools("tools")?.unwrap_or_default();
        let mut seen = HashSet::new();
        for tool in &tools {
            let name = tool.spec().name;
            if !seen.insert(name.clone()) {
                return Err(ConstructorError::DuplicateTool(name));
            }
        }

        let agent = Agent {
            model,
            tools,
            system_prompt: args.take_string("system_prompt")?,
            name: args
                .take_string("name")?
                .unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string()),
            agent_id: args
                .take_string("agent_id")?
                .unwrap_or_else(|| DEFAULT_AGENT_ID.to_string()),
            description: args.take_string("description")?,
            record_direct_tool_call: args.take_bool("record_direct_tool_call")?.unwrap_or(true),
            load_tools_from_directory: args.take_bool("load_tools_from_directory")?.unwrap_or(false),
            trace_attributes: args.take_object("trace_attributes")?.unwrap_or_default(),
            state: args.take_object("state")?.unwrap_or_default(),
        };

        args.finish()?;
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelKind;
    use crate::tools::{A2AClientToolProvider, ToolProvider};

    #[test]
    fn test_construct_with_defaults() {
        let agent = Agent::construct(Arguments::new()).expect("all parameters are optional");

        assert_eq!(agent.name(), DEFAULT_AGENT_NAME);
        assert_eq!(agent.agent_id(), DEFAULT_AGENT_ID);
        assert_eq!(agent.system_prompt(), None);
        assert!(agent.record_direct_tool_call());
        assert!(!agent.load_tools_from_directory());
        assert!(agent.tools().is_empty());
        assert_eq!(agent.model().kind(), ModelKind::Bedrock);
    }

    #[test]
    fn test_construct_keeps_explicit_false() {
        let mut args = Arguments::new();
        args.insert("record_direct_tool_call", json!(false));
        args.insert("system_prompt", json!("You are a helpful assistant."));
        args.insert("trace_attributes", json!({ "customer": "test_customer" }));

        let agent = Agent::construct(args).expect("valid arguments");

        assert!(!agent.record_direct_tool_call());
        assert_eq!(agent.system_prompt(), Some("You are a helpful assistant."));
        assert_eq!(agent.trace_attributes()["customer"], "test_customer");
    }

    #[test]
    fn test_construct_rejects_wrong_type() {
        let mut args = Arguments::new();
        args.insert("record_direct_tool_call", json!("no"));

        let err = Agent::construct(args).err();
        assert_eq!(
            err,
            Some(ConstructorError::InvalidValue {
                name: "record_direct_tool_call".to_string(),
                expected: "a boolean",
            })
        );
    }

    #[test]
    fn test_construct_rejects_duplicate_tool_names() {
        let provider = A2AClientToolProvider::new(vec!["http://localhost:9000/".to_string()]);
        let mut tools = provider.tools();
        tools.extend(provider.tools());

        let mut args = Arguments::new();
        args.insert("tools", tools);

        let err = Agent::construct(args).err();
        assert_eq!(err, Some(ConstructorError::DuplicateTool("a2a_discover_agent".to_string())));
    }

    #[test]
    fn test_undeclared_parameter_is_rejected() {
        let mut args = Arguments::new();
        args.insert("max_iterations", json!(10));

        assert_eq!(
            Agent::construct(args).err(),
            Some(ConstructorError::UnexpectedParameter("max_iterations".to_string()))
        );
    }

    #[test]
    fn test_parameters_exclude_runtime_knobs() {
        let params = Agent::parameters();
        for name in ["max_iterations", "timeout", "memory", "stream"] {
            assert!(!params.contains(name), "{name} should not be an Agent parameter");
        }
        assert!(params.iter().all(|d| !d.required));
    }

    #[tokio::test]
    async fn test_call_tool() {
        let provider = A2AClientToolProvider::new(vec!["http://localhost:9000/".to_string()]);
        let mut args = Arguments::new();
        args.insert("tools", provider.tools());
        let agent = Agent::construct(args).expect("valid arguments");

        let listed = agent
            .call_tool("a2a_list_discovered_agents", json!({}))
            .await
            .expect("listing needs no network");
        assert_eq!(listed["total_count"], 1);

        let missing = agent.call_tool("current_time", json!({})).await.err();
        assert!(matches!(missing, Some(ToolError::UnknownTool(_))));
    }
}

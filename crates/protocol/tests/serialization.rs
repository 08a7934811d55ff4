use af_protocol::*;

#[test]
fn test_config_record_from_yaml_keeps_nulls_and_falsy_values() {
    let yaml_str = r#"
system_prompt: "You are a Q&A bot."
record_direct_tool_call: false
description: null
model_config:
  type: bedrock
  temperature: 0
"#;

    let record: ConfigRecord = serde_yaml::from_str(yaml_str).expect("Failed to deserialize record");

    assert_eq!(record.len(), 4);
    assert_eq!(record["record_direct_tool_call"], serde_json::Value::Bool(false));
    assert!(record["description"].is_null());
    assert_eq!(record[MODEL_CONFIG_KEY][MODEL_TYPE_KEY], "bedrock");
    assert_eq!(record[MODEL_CONFIG_KEY]["temperature"], 0);
}

#[test]
fn test_agent_summary_serialization() {
    let summary = AgentSummary {
        agent_id: "qa_agent".to_string(),
        name: "qa_agent".to_string(),
        description: "No description available".to_string(),
        model_type: "bedrock".to_string(),
        has_tools: false,
        system_prompt_preview: "You are a Q&A bot.".to_string(),
    };

    let json = serde_json::to_value(&summary).expect("Failed to serialize AgentSummary");
    assert_eq!(json["agent_id"], "qa_agent");
    assert_eq!(json["has_tools"], false);

    let deserialized: AgentSummary = serde_json::from_value(json).expect("Failed to deserialize AgentSummary");
    assert_eq!(deserialized, summary);
}

#[test]
fn test_global_config_defaults_from_empty_toml() {
    let config: GlobalConfig = toml::from_str("").expect("Failed to parse empty config");

    assert!(config.include_builtin_agents);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_global_config_partial_server_section() {
    let toml_str = r#"
include_builtin_agents = false

[server]
port = 9000
"#;
    let config: GlobalConfig = toml::from_str(toml_str).expect("Failed to parse config");

    assert!(!config.include_builtin_agents);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_invocation_request_defaults_prompt() {
    let request: InvocationRequest = serde_json::from_str("{}").expect("Failed to parse request");
    assert_eq!(request.prompt, DEFAULT_PROMPT);
    assert!(request.agent_id.is_none());

    let request: InvocationRequest =
        serde_json::from_str(r#"{"prompt": "When is my reading time?", "agent_id": "qa_agent"}"#)
            .expect("Failed to parse request");
    assert_eq!(request.prompt, "When is my reading time?");
    assert_eq!(request.agent_id.as_deref(), Some("qa_agent"));
}

#[test]
fn test_invocation_response_omits_missing_agent() {
    let response = InvocationResponse {
        response: "Processed message: hi".to_string(),
        agent_id: None,
        tools: vec![],
    };

    let json = serde_json::to_value(&response).expect("Failed to serialize InvocationResponse");
    assert_eq!(json["response"], "Processed message: hi");
    assert!(json.get("agent_id").is_none());
}

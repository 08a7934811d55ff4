//! Test fixtures for creating sample configurations.

use af_core::agents::{AgentFactory, AgentManager};
use af_core::config::{ConfigSource, StaticConfigSource};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a temporary project with an `.agent-forge/` directory.
///
/// The project contains:
/// - `config.toml` keeping the built-in agents enabled
/// - `agents/reviewer.md` (Markdown, prompt in the body)
/// - `agents/planner.yaml` (YAML, with an unknown key and a null field)
/// - `agents/qa_agent.yaml` overriding the built-in `qa_agent`
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let af_dir = temp_dir.path().join(".agent-forge");
    std::fs::create_dir_all(af_dir.join("agents"))?;

    std::fs::write(
        af_dir.join("config.toml"),
        "include_builtin_agents = true\n\n[server]\nport = 8181\n",
    )?;

    let reviewer_md = r#"---
name: reviewer
description: Reviews pull requests
model_config:
  type: bedrock
  temperature: 0.2
---
You are a meticulous code reviewer."#;
    std::fs::write(af_dir.join("agents/reviewer.md"), reviewer_md)?;

    let planner_yaml = r#"
name: planner
description: null
favorite_color: blue
record_direct_tool_call: false
"#;
    std::fs::write(af_dir.join("agents/planner.yaml"), planner_yaml)?;

    std::fs::write(
        af_dir.join("agents/qa_agent.yaml"),
        "name: project-qa\nsystem_prompt: Project specific QA.\n",
    )?;

    Ok(temp_dir)
}

/// An in-memory source holding the four sample agents plus a few
/// deliberately awkward records.
#[allow(dead_code)]
pub fn sample_source() -> Arc<dyn ConfigSource> {
    let mut source = StaticConfigSource::builtin().expect("embedded templates parse");

    let extras = StaticConfigSource::from_values(vec![
        (
            "anthropic_agent",
            json!({ "system_prompt": "Hi", "model_config": { "type": "anthropic" } }),
        ),
        (
            "mcp_agent",
            json!({ "tools_config": { "mcp_tools": { "servers": [] } } }),
        ),
        (
            "drifted_agent",
            json!({
                "system_prompt": "Hi",
                "stream": true,
                "memory": { "kind": "buffer" },
                "unrelated": 1,
                "tools_config": { "calendar": {} }
            }),
        ),
        (
            "long_prompt_agent",
            json!({ "system_prompt": "x".repeat(250) }),
        ),
    ])
    .expect("fixture records are objects");

    for id in ["anthropic_agent", "mcp_agent", "drifted_agent", "long_prompt_agent"] {
        let record = extras.load(id).expect("static source never fails");
        source.insert(id, record);
    }

    Arc::new(source)
}

#[allow(dead_code)]
pub fn sample_factory() -> AgentFactory {
    AgentFactory::new(sample_source())
}

#[allow(dead_code)]
pub fn sample_manager() -> AgentManager {
    AgentManager::new(sample_source())
}

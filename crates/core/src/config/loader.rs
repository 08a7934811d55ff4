//! Configuration file loader for the `.agent-forge/` directory structure.
//!
//! This module loads and parses the project's configuration files:
//! - `config.toml`: Global settings
//! - `agents/*.md`: Agent records as YAML front matter, body as system prompt
//! - `agents/*.yaml`, `agents/*.yml`: Agent records as plain YAML mappings

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::AppConfig;
use af_protocol::{ConfigRecord, GlobalConfig, SYSTEM_PROMPT_KEY};
use gray_matter::engine::YAML;
use gray_matter::Matter;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Name of the project directory.
pub const AGENT_FORGE_DIR: &str = ".agent-forge";

/// Agent records directory, relative to [`AGENT_FORGE_DIR`].
pub const AGENTS_DIR: &str = "agents";

/// Global settings file, relative to [`AGENT_FORGE_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// The on-disk formats an agent record can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentFileKind {
    Markdown,
    Yaml,
}

impl AgentFileKind {
    /// Extensions tried, in order, when looking an identifier up on disk.
    pub const EXTENSIONS: [&'static str; 3] = ["md", "yaml", "yml"];

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("md") => Some(Self::Markdown),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Loads the project configuration rooted at `root`.
///
/// # Arguments
///
/// * `root` - Directory containing the `.agent-forge/` folder
///
/// # Returns
///
/// An `AppConfig` describing the project. If `.agent-forge/` or any of its
/// parts are missing, defaults are used rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if `config.toml` exists but cannot be read or
/// parsed. Agent records are parsed lazily by the configuration source.
///
/// # Example
///
/// ```rust,no_run
/// use af_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// let source = config.config_source()?;
/// println!("{} agents available", source.agent_ids()?.len());
/// # Ok(())
/// # }
/// ```
pub fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let af_dir = root.join(AGENT_FORGE_DIR);

    if !af_dir.exists() {
        debug!(dir = %af_dir.display(), "No project directory, using defaults");
        return Ok(AppConfig::default());
    }

    let global = load_global_config(&af_dir)?;

    let agents_dir = af_dir.join(AGENTS_DIR);
    let agents_dir = agents_dir.is_dir().then_some(agents_dir);

    Ok(AppConfig {
        project_dir: Some(af_dir),
        global,
        agents_dir,
    })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(af_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = af_dir.join(GLOBAL_CONFIG_FILE);

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
        path: config_path.clone(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path,
        source,
    })
}

/// Reads and parses a single agent record file.
///
/// Files whose extension is neither Markdown nor YAML are rejected with
/// `InvalidConfig`.
pub fn parse_agent_file(path: &Path) -> ConfigResult<ConfigRecord> {
    let kind = AgentFileKind::from_path(path).ok_or_else(|| ConfigError::InvalidConfig {
        path: path.to_path_buf(),
        reason: "Agent files must be .md, .yaml or .yml".to_string(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match kind {
        AgentFileKind::Markdown => parse_markdown_record(path, &content),
        AgentFileKind::Yaml => parse_yaml_record(path, &content),
    }
}

/// Parses a Markdown agent definition.
///
/// The YAML front matter is the record. The trimmed body becomes
/// `system_prompt` unless the front matter already sets one.
pub fn parse_markdown_record(path: &Path, content: &str) -> ConfigResult<ConfigRecord> {
    let matter = Matter::<YAML>::new();
    let result = matter.parse(content);

    let mut record: ConfigRecord = result
        .data
        .ok_or_else(|| ConfigError::MarkdownParse {
            path: path.to_path_buf(),
            reason: "Missing YAML front matter".to_string(),
        })?
        .deserialize()
        .map_err(|e| ConfigError::MarkdownParse {
            path: path.to_path_buf(),
            reason: format!("Failed to deserialize front matter: {e}"),
        })?;

    let body = result.content.trim();
    let has_prompt = record.get(SYSTEM_PROMPT_KEY).is_some_and(|v| !v.is_null());
    if !has_prompt && !body.is_empty() {
        record.insert(SYSTEM_PROMPT_KEY.to_string(), Value::String(body.to_string()));
    }

    Ok(record)
}

/// Parses a YAML agent record. An empty document is an empty record.
pub fn parse_yaml_record(path: &Path, content: &str) -> ConfigResult<ConfigRecord> {
    if content.trim().is_empty() {
        return Ok(ConfigRecord::new());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(record) => Ok(record),
        Value::Null => Ok(ConfigRecord::new()),
        other => Err(ConfigError::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("Expected a mapping at the top level, found {}", type_name(&other)),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_acceptance() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let af_dir = root.join(".agent-forge");
        fs::create_dir_all(af_dir.join("agents")).expect("Failed to create agents dir");

        let config_toml = r#"
include_builtin_agents = false

[server]
host = "0.0.0.0"
port = 9090
"#;
        fs::write(af_dir.join("config.toml"), config_toml).expect("Failed to write config.toml");

        let config = load_config(root).expect("Failed to load config");

        assert!(!config.global.include_builtin_agents);
        assert_eq!(config.global.server.host, "0.0.0.0");
        assert_eq!(config.global.server.port, 9090);
        assert_eq!(config.project_dir.as_deref(), Some(af_dir.as_path()));
        assert_eq!(config.agents_dir, Some(af_dir.join("agents")));
    }

    #[test]
    fn test_load_config_empty_directory() {
        let dir = tempdir().expect("Failed to create temp dir");

        let config = load_config(dir.path()).expect("Should handle missing .agent-forge");

        assert!(config.global.include_builtin_agents);
        assert!(config.project_dir.is_none());
        assert!(config.agents_dir.is_none());
    }

    #[test]
    fn test_load_config_partial() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join(".agent-forge")).expect("Failed to create .agent-forge");

        let config = load_config(dir.path()).expect("Should handle partial config");

        assert!(config.project_dir.is_some());
        assert!(config.agents_dir.is_none(), "No agents directory yet");
        assert_eq!(config.global.server.port, 8080);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = tempdir().expect("Failed to create temp dir");
        let af_dir = dir.path().join(".agent-forge");
        fs::create_dir_all(&af_dir).expect("Failed to create .agent-forge");
        fs::write(af_dir.join("config.toml"), "include_builtin_agents = [invalid toml")
            .expect("Failed to write config.toml");

        match load_config(dir.path()) {
            Err(ConfigError::TomlParse { path, .. }) => assert!(path.ends_with("config.toml")),
            other => panic!("Expected TomlParse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_markdown_body_becomes_prompt() {
        let content = r#"---
name: reviewer
record_direct_tool_call: false
model_config:
  type: bedrock
  temperature: 0
---

You are an expert code reviewer.
"#;
        let record = parse_markdown_record(Path::new("reviewer.md"), content).expect("valid front matter");

        assert_eq!(record["name"], json!("reviewer"));
        assert_eq!(record["record_direct_tool_call"], json!(false));
        assert_eq!(record["model_config"]["temperature"], json!(0));
        assert_eq!(record["system_prompt"], json!("You are an expert code reviewer."));
    }

    #[test]
    fn test_parse_markdown_front_matter_prompt_wins() {
        let content = "---\nsystem_prompt: From front matter\n---\n\nFrom body\n";
        let record = parse_markdown_record(Path::new("a.md"), content).expect("valid front matter");
        assert_eq!(record["system_prompt"], json!("From front matter"));
    }

    #[test]
    fn test_parse_markdown_empty_body_adds_nothing() {
        let content = "---\nname: quiet\n---\n";
        let record = parse_markdown_record(Path::new("quiet.md"), content).expect("valid front matter");
        assert!(!record.contains_key("system_prompt"));
    }

    #[test]
    fn test_parse_markdown_no_frontmatter() {
        match parse_markdown_record(Path::new("test.md"), "Just plain markdown content") {
            Err(ConfigError::MarkdownParse { path, reason }) => {
                assert!(path.ends_with("test.md"));
                assert!(reason.contains("Missing YAML front matter"));
            }
            other => panic!("Expected MarkdownParse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_yaml_record() {
        let content = "name: qa\nsystem_prompt: null\ntools_config:\n  a2a_client:\n    known_agent_urls: []\n";
        let record = parse_yaml_record(Path::new("qa.yaml"), content).expect("valid yaml");

        assert_eq!(record["name"], json!("qa"));
        assert_eq!(record["system_prompt"], Value::Null);
        assert!(record["tools_config"]["a2a_client"]["known_agent_urls"].is_array());

        assert!(parse_yaml_record(Path::new("empty.yaml"), "  \n").expect("empty").is_empty());
    }

    #[test]
    fn test_parse_yaml_record_errors() {
        match parse_yaml_record(Path::new("list.yml"), "- a\n- b\n") {
            Err(ConfigError::InvalidConfig { reason, .. }) => assert!(reason.contains("a sequence")),
            other => panic!("Expected InvalidConfig error, got {other:?}"),
        }

        match parse_yaml_record(Path::new("broken.yaml"), "name: test\n  invalid: [yaml") {
            Err(ConfigError::YamlParse { path, .. }) => assert!(path.ends_with("broken.yaml")),
            other => panic!("Expected YamlParse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_agent_file_rejects_other_extensions() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("readme.txt");
        fs::write(&path, "Not an agent").expect("Failed to write file");

        assert!(matches!(parse_agent_file(&path), Err(ConfigError::InvalidConfig { .. })));
        assert!(matches!(
            parse_agent_file(&dir.path().join("missing.md")),
            Err(ConfigError::FileRead { .. })
        ));
    }
}

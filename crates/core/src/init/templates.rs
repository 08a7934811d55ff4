//! Embedded template files for .agent-forge initialization.
//!
//! This module uses `rust-embed` to embed the crate's `templates/` directory
//! into the binary at compile time. The same files seed new projects and
//! back the built-in agent table.

use rust_embed::RustEmbed;

/// Prefix of the agent templates inside the embedded folder.
pub const AGENT_TEMPLATE_PREFIX: &str = "agents/";

/// Embedded template files from `crates/core/templates/`.
///
/// During development with the `debug-embed` feature, files are read from the
/// filesystem at runtime, allowing for quick iteration without recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "config.toml", "agents/qa_agent.md")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
///
/// # Example
/// ```
/// use af_core::init::templates::get_template;
///
/// let config = get_template("config.toml").expect("config.toml should exist");
/// assert!(config.contains("include_builtin_agents"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all template files under `prefix`, sorted.
///
/// # Example
/// ```
/// use af_core::init::templates::list_templates;
///
/// let agents = list_templates("agents/");
/// assert!(agents.contains(&"agents/simple_agent.md".to_string()));
/// ```
pub fn list_templates(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_template() {
        let content = get_template("config.toml").expect("config.toml should be embedded");
        assert!(content.contains("include_builtin_agents = true"));
        assert!(content.contains("[server]"));
    }

    #[test]
    fn test_get_agent_template() {
        let creative = get_template("agents/creative_agent.md").expect("creative_agent.md should be embedded");
        assert!(creative.contains("name: creative-writer"));

        let analytical = get_template("agents/analytical_agent.md").expect("analytical_agent.md should be embedded");
        assert!(analytical.contains("a2a_client"));
    }

    #[test]
    fn test_get_nonexistent_template() {
        assert!(get_template("nonexistent.txt").is_none());
    }

    #[test]
    fn test_list_agent_templates() {
        let agents = list_templates(AGENT_TEMPLATE_PREFIX);
        assert_eq!(
            agents,
            vec![
                "agents/analytical_agent.md".to_string(),
                "agents/creative_agent.md".to_string(),
                "agents/qa_agent.md".to_string(),
                "agents/simple_agent.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_empty_prefix() {
        // config.toml plus four agents
        assert_eq!(list_templates("").len(), 5);
    }
}

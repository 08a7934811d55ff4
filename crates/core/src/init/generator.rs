//! Directory structure and file generation for .agent-forge initialization.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates, AGENT_TEMPLATE_PREFIX};
use crate::config::loader::{AGENT_FORGE_DIR, AGENTS_DIR, GLOBAL_CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Agent written when only a minimal project is requested.
pub const MINIMAL_AGENT_TEMPLATE: &str = "agents/simple_agent.md";

/// Options for initializing a .agent-forge directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target directory where .agent-forge will be created.
    pub target_dir: PathBuf,

    /// Overwrite existing .agent-forge directory if it exists.
    pub force: bool,

    /// Create minimal template (config and a single agent).
    pub minimal: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            minimal: false,
        }
    }
}

/// Generate a .agent-forge directory structure with templates.
///
/// This function creates the following structure:
/// ```text
/// .agent-forge/
/// ├── config.toml
/// └── agents/
///     ├── simple_agent.md
///     ├── qa_agent.md        (unless minimal)
///     ├── creative_agent.md  (unless minimal)
///     └── analytical_agent.md (unless minimal)
/// ```
///
/// With `force`, existing template files are overwritten; other files in the
/// directory are left alone.
///
/// # Arguments
/// * `options` - Configuration for the initialization process
///
/// # Returns
/// The paths written, or an `InitError` if:
/// - The .agent-forge directory already exists (without force flag)
/// - A template file cannot be found
/// - File system operations fail
///
/// # Example
/// ```no_run
/// use af_core::init::{InitOptions, generate_agent_forge_structure};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = InitOptions {
///     target_dir: PathBuf::from("."),
///     force: false,
///     minimal: false,
/// };
///
/// generate_agent_forge_structure(options).await?;
/// # Ok(())
/// # }
/// ```
pub async fn generate_agent_forge_structure(options: InitOptions) -> InitResult<Vec<PathBuf>> {
    let af_dir = options.target_dir.join(AGENT_FORGE_DIR);

    if af_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(af_dir));
    }

    let agents_dir = af_dir.join(AGENTS_DIR);
    fs::create_dir_all(&agents_dir).map_err(|source| InitError::DirectoryCreate {
        path: agents_dir.clone(),
        source,
    })?;

    let mut templates = vec![GLOBAL_CONFIG_FILE.to_string()];
    if options.minimal {
        templates.push(MINIMAL_AGENT_TEMPLATE.to_string());
    } else {
        templates.extend(list_templates(AGENT_TEMPLATE_PREFIX));
    }

    let mut written = Vec::with_capacity(templates.len());
    for template in &templates {
        written.push(write_template_file(&af_dir, template)?);
    }

    info!(dir = %af_dir.display(), files = written.len(), "Initialized agent-forge project");
    Ok(written)
}

/// Write one embedded template below `af_dir`, returning the written path.
fn write_template_file(af_dir: &Path, template_path: &str) -> InitResult<PathBuf> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = af_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    Ok(target_path)
}

//! Project configuration model.

use crate::config::error::ConfigResult;
use crate::config::source::{ConfigSource, DirectoryConfigSource, LayeredConfigSource, StaticConfigSource};
use af_protocol::GlobalConfig;
use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration loaded from the `.agent-forge/` directory.
///
/// # Example
///
/// ```rust,no_run
/// use af_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("Serving on {}:{}", config.global.server.host, config.global.server.port);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// The `.agent-forge/` directory, if it exists.
    pub project_dir: Option<PathBuf>,

    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// The `agents/` directory, if it exists.
    pub agents_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration source for this project.
    ///
    /// Records under `agents/` take precedence; the built-in agents follow
    /// when `include_builtin_agents` is set.
    pub fn config_source(&self) -> ConfigResult<Arc<dyn ConfigSource>> {
        let mut layers: Vec<Arc<dyn ConfigSource>> = Vec::new();

        if let Some(agents_dir) = &self.agents_dir {
            layers.push(Arc::new(DirectoryConfigSource::new(agents_dir.clone())));
        }
        if self.global.include_builtin_agents {
            layers.push(Arc::new(StaticConfigSource::builtin()?));
        }

        Ok(Arc::new(LayeredConfigSource::new(layers)))
    }
}

//! Configuration sources that resolve agent identifiers to records.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::loader::{parse_agent_file, parse_markdown_record, AgentFileKind};
use crate::init::templates::{get_template, list_templates, AGENT_TEMPLATE_PREFIX};
use af_protocol::ConfigRecord;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use walkdir::WalkDir;

/// Looks agent configuration records up by identifier.
///
/// `load` returns an empty record for an unknown identifier; only faults of
/// the backing store are errors.
pub trait ConfigSource: Send + Sync {
    fn load(&self, agent_id: &str) -> ConfigResult<ConfigRecord>;

    /// Every identifier this source can resolve, sorted.
    fn agent_ids(&self) -> ConfigResult<Vec<String>>;
}

/// An in-memory table of records.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    records: BTreeMap<String, ConfigRecord>,
}

impl StaticConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I, K>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigRecord)>,
        K: Into<String>,
    {
        Self {
            records: records.into_iter().map(|(id, record)| (id.into(), record)).collect(),
        }
    }

    /// Build a table from JSON values, each of which must be an object.
    pub fn from_values<I, K>(values: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut source = Self::new();
        for (id, value) in values {
            let id = id.into();
            match value {
                Value::Object(record) => source.insert(id, record),
                _ => {
                    return Err(ConfigError::InvalidConfig {
                        path: PathBuf::from(id),
                        reason: "Agent record must be an object".to_string(),
                    })
                }
            }
        }
        Ok(source)
    }

    /// The sample agents shipped with the crate, parsed from the embedded
    /// `agents/*.md` templates.
    pub fn builtin() -> ConfigResult<Self> {
        let mut source = Self::new();
        for template in list_templates(AGENT_TEMPLATE_PREFIX) {
            let path = Path::new(&template);
            let Some(agent_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = get_template(&template).ok_or_else(|| ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "Embedded template disappeared".to_string(),
            })?;
            source.insert(agent_id, parse_markdown_record(path, &content)?);
        }
        Ok(source)
    }

    pub fn insert(&mut self, agent_id: impl Into<String>, record: ConfigRecord) {
        self.records.insert(agent_id.into(), record);
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self, agent_id: &str) -> ConfigResult<ConfigRecord> {
        Ok(self.records.get(agent_id).cloned().unwrap_or_default())
    }

    fn agent_ids(&self) -> ConfigResult<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }
}

/// Reads records from `<dir>/<id>.md`, `<id>.yaml` or `<id>.yml` on every call.
#[derive(Debug, Clone)]
pub struct DirectoryConfigSource {
    dir: PathBuf,
}

impl DirectoryConfigSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn find_file(&self, agent_id: &str) -> Option<PathBuf> {
        AgentFileKind::EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{agent_id}.{ext}")))
            .find(|path| path.is_file())
    }
}

/// Whether `agent_id` can name a file directly inside the agents directory.
fn is_plain_file_stem(agent_id: &str) -> bool {
    !agent_id.is_empty()
        && !agent_id.starts_with('.')
        && !agent_id.contains(['/', '\\'])
}

impl ConfigSource for DirectoryConfigSource {
    fn load(&self, agent_id: &str) -> ConfigResult<ConfigRecord> {
        if !is_plain_file_stem(agent_id) {
            debug!(agent_id, "Identifier cannot name an agent file");
            return Ok(ConfigRecord::new());
        }

        match self.find_file(agent_id) {
            Some(path) => {
                debug!(agent_id, path = %path.display(), "Loading agent record");
                parse_agent_file(&path)
            }
            None => Ok(ConfigRecord::new()),
        }
    }

    fn agent_ids(&self) -> ConfigResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = BTreeSet::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
                path: self.dir.clone(),
                source,
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || AgentFileKind::from_path(path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_plain_file_stem(stem) {
                    ids.insert(stem.to_string());
                }
            }
        }

        Ok(ids.into_iter().collect())
    }
}

/// Consults each layer in order; the first non-empty record wins.
///
/// Records are never merged across layers.
#[derive(Clone, Default)]
pub struct LayeredConfigSource {
    layers: Vec<Arc<dyn ConfigSource>>,
}

impl LayeredConfigSource {
    pub fn new(layers: Vec<Arc<dyn ConfigSource>>) -> Self {
        Self { layers }
    }

    pub fn push(&mut self, layer: Arc<dyn ConfigSource>) {
        self.layers.push(layer);
    }
}

impl ConfigSource for LayeredConfigSource {
    fn load(&self, agent_id: &str) -> ConfigResult<ConfigRecord> {
        for (index, layer) in self.layers.iter().enumerate() {
            let record = layer.load(agent_id)?;
            if !record.is_empty() {
                debug!(agent_id, layer = index, "Resolved agent record");
                return Ok(record);
            }
        }
        Ok(ConfigRecord::new())
    }

    fn agent_ids(&self) -> ConfigResult<Vec<String>> {
        let mut ids = BTreeSet::new();
        for layer in &self.layers {
            ids.extend(layer.agent_ids()?);
        }
        Ok(ids.into_iter().collect())
    }
}

//! Agent factory for creating agent instances from configuration records.

use crate::agents::agent::Agent;
use crate::agents::error::{FactoryError, FactoryResult};
use crate::config::source::ConfigSource;
use crate::models::create_model_from_config;
use crate::params::{filter, translate, Arguments, Constructor};
use crate::tools::{create_tools_from_config, is_truthy, Tool};
use af_protocol::{AgentSummary, ConfigRecord, MODEL_CONFIG_KEY, MODEL_TYPE_KEY, SYSTEM_PROMPT_KEY, TOOLS_CONFIG_KEY};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Record key -> agent constructor parameter.
///
/// Keys the constructor does not declare are dropped during translation.
pub const AGENT_PARAM_MAPPING: &[(&str, &str)] = &[
    ("system_prompt", "system_prompt"),
    ("name", "name"),
    ("agent_id", "agent_id"),
    ("description", "description"),
    ("record_direct_tool_call", "record_direct_tool_call"),
    ("max_iterations", "max_iterations"),
    ("timeout", "timeout"),
    ("memory", "memory"),
    ("stream", "stream"),
];

/// Number of prompt characters kept in an [`AgentSummary`].
pub const SYSTEM_PROMPT_PREVIEW_CHARS: usize = 100;

/// Appended to a prompt preview that was cut.
pub const PREVIEW_ELLIPSIS: &str = "...";

pub const NO_DESCRIPTION: &str = "No description available";

pub const UNKNOWN_MODEL_TYPE: &str = "unknown";

/// Factory for creating agent instances from a configuration source.
///
/// The factory itself holds no state beyond the source; every call looks
/// the configuration up again. Caching lives in [`crate::agents::AgentManager`].
#[derive(Clone)]
pub struct AgentFactory {
    source: Arc<dyn ConfigSource>,
}

impl AgentFactory {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Arc<dyn ConfigSource> {
        &self.source
    }

    /// Create an [`Agent`] from the configuration stored under `agent_id`.
    ///
    /// # Arguments
    ///
    /// * `agent_id` - Identifier to look up in the configuration source
    /// * `extra_tools` - Tools appended after those built from `tools_config`
    ///
    /// # Errors
    ///
    /// - `NotFound` if the source has no configuration for `agent_id`
    /// - `UnsupportedType` for unknown or unimplemented model/tool types
    /// - `ConstructionFailed` if the agent constructor rejects its arguments
    pub fn create_agent_from_config(
        &self,
        agent_id: &str,
        extra_tools: Vec<Arc<dyn Tool>>,
    ) -> FactoryResult<Agent> {
        self.construct::<Agent>(agent_id, extra_tools)
    }

    /// Build any [`Constructor`] from the configuration stored under `agent_id`.
    ///
    /// The model and tools are built first, scalar fields are translated
    /// through [`AGENT_PARAM_MAPPING`], and the result is filtered against
    /// `C::parameters()` before `C::construct` is called once.
    pub fn construct<C: Constructor>(
        &self,
        agent_id: &str,
        extra_tools: Vec<Arc<dyn Tool>>,
    ) -> FactoryResult<C::Output> {
        let record = self.load_record(agent_id)?;
        let args = build_arguments::<C>(&record, extra_tools)?;

        debug!(
            agent_id,
            parameters = ?args.names().collect::<Vec<_>>(),
            "Constructing agent"
        );

        match C::construct(args) {
            Ok(output) => {
                info!(agent_id, "Created agent");
                Ok(output)
            }
            Err(e) => {
                warn!(agent_id, error = %e, "Agent construction failed");
                Err(FactoryError::ConstructionFailed {
                    agent_id: agent_id.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Summarize an agent's configuration without constructing it.
    ///
    /// The summary never contains the full system prompt.
    pub fn describe(&self, agent_id: &str) -> FactoryResult<AgentSummary> {
        let record = self.load_record(agent_id)?;

        let text = |key: &str| record.get(key).and_then(Value::as_str);

        Ok(AgentSummary {
            agent_id: agent_id.to_string(),
            name: text("name").unwrap_or(agent_id).to_string(),
            description: text("description").unwrap_or(NO_DESCRIPTION).to_string(),
            model_type: record
                .get(MODEL_CONFIG_KEY)
                .and_then(|model| model.get(MODEL_TYPE_KEY))
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_MODEL_TYPE)
                .to_string(),
            has_tools: record.get(TOOLS_CONFIG_KEY).map(is_truthy).unwrap_or(false),
            system_prompt_preview: preview_prompt(text(SYSTEM_PROMPT_KEY).unwrap_or("")),
        })
    }

    /// All identifiers known to the configuration source.
    pub fn list_available_agents(&self) -> FactoryResult<Vec<String>> {
        Ok(self.source.agent_ids()?)
    }

    fn load_record(&self, agent_id: &str) -> FactoryResult<ConfigRecord> {
        let record = self.source.load(agent_id)?;
        if record.is_empty() {
            return Err(FactoryError::NotFound {
                agent_id: agent_id.to_string(),
            });
        }
        Ok(record)
    }
}

/// Map a configuration record onto the parameters of `C`.
///
/// A null `model_config` counts as absent. Tools from `tools_config` come
/// first, followed by `extra_tools`; `tools` is only set when the combined
/// list is non-empty.
pub fn build_arguments<C: Constructor>(
    record: &ConfigRecord,
    extra_tools: Vec<Arc<dyn Tool>>,
) -> FactoryResult<Arguments> {
    let params = C::parameters();
    let mut args = Arguments::new();

    if let Some(model_config) = record.get(MODEL_CONFIG_KEY).filter(|v| !v.is_null()) {
        args.insert("model", create_model_from_config(model_config)?);
    }

    let mut tools = match record.get(TOOLS_CONFIG_KEY) {
        Some(tools_config) => create_tools_from_config(tools_config)?,
        None => Vec::new(),
    };
    tools.extend(extra_tools);
    if !tools.is_empty() {
        args.insert("tools", tools);
    }

    for (name, value) in translate(record, AGENT_PARAM_MAPPING, &params).iter() {
        args.insert(name, value.clone());
    }

    Ok(filter(args, &params))
}

/// Cut `prompt` to [`SYSTEM_PROMPT_PREVIEW_CHARS`] characters, appending
/// [`PREVIEW_ELLIPSIS`] when anything was removed.
pub fn preview_prompt(prompt: &str) -> String {
    if prompt.chars().count() > SYSTEM_PROMPT_PREVIEW_CHARS {
        let mut preview: String = prompt.chars().take(SYSTEM_PROMPT_PREVIEW_CHARS).collect();
        preview.push_str(PREVIEW_ELLIPSIS);
        preview
    } else {
        prompt.to_string()
    }
}

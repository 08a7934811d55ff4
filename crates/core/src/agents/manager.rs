//! Agent manager for creating and caching agents.
//!
//! The `AgentManager` is responsible for:
//! - Building agents through an [`AgentFactory`]
//! - Caching one instance per agent identifier
//! - Forced rebuilds and cache eviction
//! - Listing and describing configured agents

use crate::agents::agent::Agent;
use crate::agents::cache::AgentCache;
use crate::agents::error::FactoryResult;
use crate::agents::factory::AgentFactory;
use crate::config::source::ConfigSource;
use crate::tools::Tool;
use af_protocol::AgentSummary;
use std::sync::Arc;
use tracing::{debug, info};

/// Creates agents on demand and keeps the most recent instance per identifier.
///
/// A cache hit returns the identical instance (`Arc::ptr_eq` holds). Evicting
/// or replacing an entry never invalidates instances already handed out.
/// Callers sharing a manager across threads wrap it in a lock.
pub struct AgentManager {
    factory: AgentFactory,
    cache: AgentCache<Agent>,
}

impl AgentManager {
    /// Create a new AgentManager reading configuration from `source`.
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self::with_factory(AgentFactory::new(source))
    }

    pub fn with_factory(factory: AgentFactory) -> Self {
        Self {
            factory,
            cache: AgentCache::new(),
        }
    }

    pub fn factory(&self) -> &AgentFactory {
        &self.factory
    }

    /// Get or create an agent.
    ///
    /// # Arguments
    ///
    /// * `agent_id` - Identifier to look up
    /// * `extra_tools` - Tools appended to the configured ones; ignored on a cache hit
    /// * `force` - Rebuild even when a cached instance exists
    ///
    /// # Returns
    ///
    /// The cached instance when present and `force` is false, otherwise a
    /// newly built agent which then replaces the cache entry. On failure the
    /// cache is left unchanged.
    pub fn create_agent(
        &mut self,
        agent_id: &str,
        extra_tools: Vec<Arc<dyn Tool>>,
        force: bool,
    ) -> FactoryResult<Arc<Agent>> {
        if !force {
            if let Some(agent) = self.cache.get(agent_id) {
                debug!(agent_id, "Using cached agent");
                return Ok(agent);
            }
        }

        let agent = Arc::new(self.factory.create_agent_from_config(agent_id, extra_tools)?);
        if self.cache.insert(agent_id, Arc::clone(&agent)).is_some() {
            info!(agent_id, "Replaced cached agent");
        } else {
            debug!(agent_id, "Cached new agent");
        }
        Ok(agent)
    }

    /// Get a cached agent without building one.
    pub fn get_agent(&self, agent_id: &str) -> Option<Arc<Agent>> {
        self.cache.get(agent_id)
    }

    /// Identifiers with a cached instance, sorted.
    pub fn list_cached_agents(&self) -> Vec<String> {
        self.cache.keys()
    }

    /// Evict one entry, or every entry when `agent_id` is `None`.
    ///
    /// Returns the number of entries removed.
    pub fn clear_cache(&mut self, agent_id: Option<&str>) -> usize {
        match agent_id {
            Some(agent_id) => {
                let removed = usize::from(self.cache.remove(agent_id).is_some());
                debug!(agent_id, removed, "Evicted cached agent");
                removed
            }
            None => {
                let removed = self.cache.len();
                self.cache.clear();
                debug!(removed, "Cleared agent cache");
                removed
            }
        }
    }

    /// All identifiers the configuration source knows about.
    pub fn list_available_agents(&self) -> FactoryResult<Vec<String>> {
        self.factory.list_available_agents()
    }

    /// Summarize an agent's configuration without building it.
    pub fn get_agent_info(&self, agent_id: &str) -> FactoryResult<AgentSummary> {
        self.factory.describe(agent_id)
    }
}

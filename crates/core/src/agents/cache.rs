//! Per-identifier cache of constructed agents.

use std::collections::HashMap;
use std::sync::Arc;

/// Holds at most one constructed instance per identifier.
///
/// Entries are added on first construction, replaced only by an explicit
/// [`AgentCache::insert`] over an existing key, and removed only by
/// [`AgentCache::remove`] or [`AgentCache::clear`]. There is no expiry and
/// no size bound, so the cache grows with the number of distinct
/// identifiers it has seen.
///
/// Removing an entry never affects instances already handed out.
#[derive(Debug)]
pub struct AgentCache<T> {
    entries: HashMap<String, Arc<T>>,
}

impl<T> Default for AgentCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> AgentCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, agent_id: &str) -> Option<Arc<T>> {
        self.entries.get(agent_id).cloned()
    }

    /// Store `value` under `agent_id`, returning the entry it replaced.
    pub fn insert(&mut self, agent_id: &str, value: Arc<T>) -> Option<Arc<T>> {
        self.entries.insert(agent_id.to_string(), value)
    }

    pub fn remove(&mut self, agent_id: &str) -> Option<Arc<T>> {
        self.entries.remove(agent_id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.entries.contains_key(agent_id)
    }

    /// Cached identifiers, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

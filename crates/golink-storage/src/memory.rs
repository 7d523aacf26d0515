use async_trait::async_trait;
use dashmap::DashMap;
use golink_core::store::{AliasStore, Result};
use golink_core::Mapping;
use tracing::trace;

/// Storage key the mapping lives under unless another one is chosen.
pub const DEFAULT_STORAGE_KEY: &str = "goLinks";

/// In-memory key-value implementation of [`AliasStore`] using DashMap.
///
/// Several stores may share one [`DashMap`] under different keys, the same
/// way a host key-value area holds unrelated values side by side. Each save
/// replaces the whole mapping under the key.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    storage: DashMap<String, Mapping>,
    key: String,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }

    /// Creates a new, empty in-memory store that uses `key` for the mapping.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            storage: DashMap::new(),
            key: key.into(),
        }
    }

    /// Creates a store already holding `mapping`.
    pub fn with_mapping(mapping: Mapping) -> Self {
        let store = Self::new();
        store.storage.insert(store.key.clone(), mapping);
        store
    }

    /// Returns the key the mapping is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AliasStore for InMemoryStore {
    async fn load(&self) -> Result<Mapping> {
        let mapping = self
            .storage
            .get(&self.key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        trace!(key = %self.key, count = mapping.len(), "loaded mapping from memory");
        Ok(mapping)
    }

    async fn save(&self, mapping: &Mapping) -> Result<()> {
        trace!(key = %self.key, count = mapping.len(), "saving mapping to memory");
        self.storage.insert(self.key.clone(), mapping.clone());
        Ok(())
    }
}

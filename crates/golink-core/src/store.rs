use crate::error::StoreError;
use crate::mapping::Mapping;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable storage for the whole [`Mapping`].
///
/// There is no per-entry API: callers load the full mapping, derive a new
/// one, and save it back. Concurrent writers resolve as last-write-wins.
#[async_trait]
pub trait AliasStore: Send + Sync + 'static {
    /// Loads the stored mapping.
    ///
    /// Implementations that seed an empty medium return the seeded mapping
    /// here rather than an empty one.
    async fn load(&self) -> Result<Mapping>;

    /// Replaces the stored mapping with `mapping`.
    async fn save(&self, mapping: &Mapping) -> Result<()>;
}

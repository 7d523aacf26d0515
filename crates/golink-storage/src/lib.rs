//! [`AliasStore`](golink_core::AliasStore) backends for go links.
//!
//! - [`InMemoryStore`]: a DashMap-backed key-value area.
//! - [`FileStore`]: a text or JSON file on disk.
//! - [`SeededStore`]: a decorator that fills an empty store with defaults.

pub mod file;
pub mod memory;
pub mod seeded;

pub use file::{FileFormat, FileStore};
pub use memory::{InMemoryStore, DEFAULT_STORAGE_KEY};
pub use seeded::{default_mapping, SeededStore, DEFAULT_LINKS};

use async_trait::async_trait;
use golink_core::store::{AliasStore, Result};
use golink_core::{codec, Mapping, StoreError};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// On-disk encoding used by [`FileStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// The bulk `alias:destination` line format.
    Text,
    /// An ordered JSON object, `{"alias": "url"}`.
    Json,
}

impl FileFormat {
    /// Picks [`FileFormat::Json`] for a `.json` extension and text otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Text,
        }
    }
}

/// File-backed implementation of [`AliasStore`].
///
/// A missing or blank file loads as an empty mapping. Each save writes a
/// uniquely named temporary file in the target's directory and renames it
/// over the target, so readers only ever see a complete mapping and
/// concurrent saves do not collide.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: FileFormat,
}

impl FileStore {
    /// Creates a store for `path`, inferring the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    /// Creates a store for `path` with an explicit format.
    pub fn with_format(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn decode(&self, content: &str) -> Result<Mapping> {
        if content.trim().is_empty() {
            return Ok(Mapping::new());
        }

        match self.format {
            FileFormat::Text => codec::parse(content).map_err(|e| {
                StoreError::InvalidData(format!("{}: {e}", self.path.display()))
            }),
            FileFormat::Json => serde_json::from_str(content).map_err(|e| {
                StoreError::InvalidData(format!("{}: {e}", self.path.display()))
            }),
        }
    }

    fn encode(&self, mapping: &Mapping) -> Result<String> {
        match self.format {
            FileFormat::Text => {
                let mut text = codec::format(mapping);
                if !text.is_empty() {
                    text.push('\n');
                }
                Ok(text)
            }
            FileFormat::Json => serde_json::to_string_pretty(mapping)
                .map_err(|e| StoreError::Operation(format!("failed to encode mapping: {e}"))),
        }
    }
}

#[async_trait]
impl AliasStore for FileStore {
    async fn load(&self) -> Result<Mapping> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file does not exist yet");
                return Ok(Mapping::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mapping = self.decode(&content)?;
        trace!(path = %self.path.display(), count = mapping.len(), "loaded mapping from file");
        Ok(mapping)
    }

    async fn save(&self, mapping: &Mapping) -> Result<()> {
        let content = self.encode(mapping)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&path, content.as_bytes()))
            .await
            .map_err(|e| StoreError::Operation(format!("save task failed: {e}")))??;

        debug!(path = %self.path.display(), count = mapping.len(), "saved mapping to file");
        Ok(())
    }
}

/// Writes `content` to a uniquely named temporary file next to `path`, then
/// renames it over `path`. The temporary file is removed if any step fails.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| StoreError::from(e.error))?;
    Ok(())
}

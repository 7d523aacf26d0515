use crate::destination::Destination;
use crate::error::NavigationError;
use async_trait::async_trait;
use std::fmt::Display;

/// Where a resolved destination should be opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OpenMode {
    #[default]
    ReplaceCurrent,
    OpenForeground,
    OpenBackground,
}

impl OpenMode {
    /// Maps a host disposition name onto an `OpenMode`.
    ///
    /// Unrecognized dispositions fall back to [`OpenMode::ReplaceCurrent`].
    pub fn from_disposition(disposition: &str) -> Self {
        match disposition.trim() {
            "newForegroundTab" => OpenMode::OpenForeground,
            "newBackgroundTab" => OpenMode::OpenBackground,
            _ => OpenMode::ReplaceCurrent,
        }
    }

    pub fn as_disposition(&self) -> &'static str {
        match self {
            OpenMode::ReplaceCurrent => "currentTab",
            OpenMode::OpenForeground => "newForegroundTab",
            OpenMode::OpenBackground => "newBackgroundTab",
        }
    }
}

impl Display for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_disposition())
    }
}

/// Host capability that actually opens a destination.
#[async_trait]
pub trait NavigationAdapter: Send + Sync + 'static {
    /// Opens `destination`. Failures are reported to the caller and never retried.
    async fn navigate(
        &self,
        destination: &Destination,
        mode: OpenMode,
    ) -> Result<(), NavigationError>;
}

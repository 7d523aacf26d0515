use thiserror::Error;

/// Errors produced while parsing the bulk `alias:destination` text format.
///
/// Line numbers are 1-based and counted within the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,
    #[error("no go links found")]
    NoEntries,
    #[error("invalid format on line {line}: missing colon separator")]
    MissingSeparator { line: usize },
    #[error("invalid format on line {line}: missing alias")]
    MissingAlias { line: usize },
    #[error("invalid format on line {line}: missing URL")]
    MissingDestination { line: usize },
    #[error("invalid URL on line {line}: \"{raw}\"")]
    InvalidDestination { line: usize, raw: String },
}

impl ParseError {
    /// Returns the offending line, if the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput | ParseError::NoEntries => None,
            ParseError::MissingSeparator { line }
            | ParseError::MissingAlias { line }
            | ParseError::MissingDestination { line }
            | ParseError::InvalidDestination { line, .. } => Some(*line),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias cannot be empty")]
    Empty,
    #[error("alias cannot contain {0:?}")]
    ForbiddenCharacter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationError {
    #[error("URL cannot be empty")]
    Empty,
    #[error("invalid URL \"{raw}\": {reason}")]
    Invalid { raw: String, reason: String },
}

/// Errors surfaced by an [`AliasStore`](crate::store::AliasStore) backend.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store I/O failed: {0}")]
    Io(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum NavigationError {
    #[error("failed to launch opener: {0}")]
    Launch(String),
    #[error("opener exited unsuccessfully: {0}")]
    Exit(String),
    #[error("navigation I/O failed: {0}")]
    Io(String),
}

/// Either half of an `alias -> destination` pair failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error(transparent)]
    Alias(#[from] AliasError),
    #[error(transparent)]
    Destination(#[from] DestinationError),
}

use crate::error::DestinationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

/// An absolute URL a go link points at.
///
/// The text is stored exactly as provided after trimming; the URL is only
/// parsed to check that it has a scheme and a host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(String);

impl Destination {
    /// Creates a new `Destination` after validating the input.
    pub fn new(url: impl AsRef<str>) -> Result<Self, DestinationError> {
        let trimmed = url.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DestinationError::Empty);
        }
        Self::validate(trimmed)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the destination as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(url: &str) -> Result<(), DestinationError> {
        let invalid = |reason: String| DestinationError::Invalid {
            raw: url.to_owned(),
            reason,
        };

        // The url crate silently strips newlines, but the bulk format cannot carry them.
        if url.contains('\n') {
            return Err(invalid("contains a line break".to_owned()));
        }

        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
        if !parsed.has_host() {
            return Err(invalid(format!(
                "scheme '{}' has no host",
                parsed.scheme()
            )));
        }

        Ok(())
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Destination {
    type Error = DestinationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Destination> for String {
    fn from(value: Destination) -> Self {
        value.0
    }
}

use crate::error::AliasError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated, case-normalized go link key.
///
/// Aliases are trimmed and lower-cased on construction, so two aliases
/// compare equal iff their normalized text is equal. An alias may not
/// contain `:` or a newline, since the bulk text format uses those as
/// separators.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alias(String);

const FORBIDDEN: [char; 2] = [':', '\n'];

impl Alias {
    /// Creates a new `Alias` after normalizing and validating the input.
    pub fn new(alias: impl AsRef<str>) -> Result<Self, AliasError> {
        let normalized = normalize(alias.as_ref());
        if normalized.is_empty() {
            return Err(AliasError::Empty);
        }
        if let Some(c) = normalized.chars().find(|c| FORBIDDEN.contains(c)) {
            return Err(AliasError::ForbiddenCharacter(c));
        }
        Ok(Self(normalized))
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trims surrounding whitespace and lower-cases `text`.
///
/// This is the single normalization rule shared by aliases, suggestion
/// queries and resolver lookups.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Alias {
    type Error = AliasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Alias> for String {
    fn from(value: Alias) -> Self {
        value.0
    }
}

//! Ranked typeahead suggestions over a [`Mapping`].
//!
//! Aliases that start with the query always rank ahead of aliases that only
//! contain it. Within each group the mapping's insertion order is kept, so the
//! first suggestion is the earliest-inserted prefix match. Hosts that render
//! an inline completion rely on that.

use crate::alias::{normalize, Alias};
use crate::destination::Destination;
use crate::mapping::Mapping;
use std::iter::FusedIterator;

/// Number of suggestions returned when the caller does not choose a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Number of aliases listed by [`hint`] when the caller does not choose one.
pub const DEFAULT_HINT_COUNT: usize = 3;

/// A read-only view of one mapping entry offered as a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub alias: &'a Alias,
    pub destination: &'a Destination,
}

impl Suggestion<'_> {
    /// Renders `alias → destination`.
    pub fn description(&self) -> String {
        format!("{} → {}", self.alias, self.destination)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Empty query: every entry in insertion order.
    All,
    Prefix,
    Substring,
    Done,
}

/// Lazy, bounded sequence of suggestions. Clone it to restart.
#[derive(Debug, Clone)]
pub struct Suggestions<'a> {
    entries: &'a [(Alias, Destination)],
    query: String,
    phase: Phase,
    cursor: usize,
    remaining: usize,
}

impl<'a> Suggestions<'a> {
    /// The normalized query the suggestions are ranked against.
    pub fn query(&self) -> &str {
        &self.query
    }

    fn accepts(&self, alias: &str) -> bool {
        match self.phase {
            Phase::All => true,
            Phase::Prefix => alias.starts_with(&self.query),
            Phase::Substring => !alias.starts_with(&self.query) && alias.contains(&self.query),
            Phase::Done => false,
        }
    }

    fn advance_phase(&mut self) {
        self.cursor = 0;
        self.phase = match self.phase {
            Phase::Prefix => Phase::Substring,
            Phase::All | Phase::Substring | Phase::Done => Phase::Done,
        };
    }
}

impl<'a> Iterator for Suggestions<'a> {
    type Item = Suggestion<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        while self.remaining > 0 && self.phase != Phase::Done {
            let Some((alias, destination)) = entries.get(self.cursor) else {
                self.advance_phase();
                continue;
            };
            self.cursor += 1;

            if self.accepts(alias.as_str()) {
                self.remaining -= 1;
                return Some(Suggestion { alias, destination });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Done => (0, Some(0)),
            _ => (0, Some(self.remaining.min(self.entries.len()))),
        }
    }
}

impl FusedIterator for Suggestions<'_> {}

/// Ranks aliases in `mapping` against `query`, yielding at most `limit`.
///
/// The query is trimmed and lower-cased. An empty query yields the first
/// `limit` entries in insertion order.
pub fn suggest<'a>(mapping: &'a Mapping, query: &str, limit: usize) -> Suggestions<'a> {
    let query = normalize(query);
    let phase = if query.is_empty() {
        Phase::All
    } else {
        Phase::Prefix
    };

    Suggestions {
        entries: mapping.entries(),
        query,
        phase,
        cursor: 0,
        remaining: limit,
    }
}

/// Text for a host's default (inline) suggestion: `Autocomplete: alias → url`.
pub fn default_suggestion(mapping: &Mapping, query: &str) -> Option<String> {
    suggest(mapping, query, 1)
        .next()
        .map(|first| format!("Autocomplete: {}", first.description()))
}

/// A short `Try: a, b, c...` prompt listing the first `count` aliases.
///
/// The trailing `...` is only added when more aliases exist.
pub fn hint(mapping: &Mapping, count: usize) -> Option<String> {
    if mapping.is_empty() || count == 0 {
        return None;
    }

    let listed = mapping
        .aliases()
        .take(count)
        .map(Alias::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let more = if mapping.len() > count { "..." } else { "" };
    Some(format!("Try: {listed}{more}"))
}

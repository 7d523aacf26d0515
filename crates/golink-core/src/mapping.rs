use crate::alias::{normalize, Alias};
use crate::destination::Destination;
use crate::error::EntryError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered set of `alias -> destination` pairs with unique aliases.
///
/// A `Mapping` is never edited in place by its consumers: [`with_entry`] and
/// [`without`] derive a new value, so a half-applied edit is never
/// observable.
///
/// [`with_entry`]: Mapping::with_entry
/// [`without`]: Mapping::without
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(Alias, Destination)>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from unvalidated string pairs.
    ///
    /// Later pairs with the same normalized alias replace earlier ones.
    pub fn try_from_pairs<I, A, D>(pairs: I) -> Result<Self, EntryError>
    where
        I: IntoIterator<Item = (A, D)>,
        A: AsRef<str>,
        D: AsRef<str>,
    {
        let mut mapping = Self::new();
        for (alias, destination) in pairs {
            mapping.assign(Alias::new(alias)?, Destination::new(destination)?);
        }
        Ok(mapping)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Alias, &Destination)> + Clone {
        self.entries.iter().map(|(a, d)| (a, d))
    }

    /// Iterates over aliases in insertion order.
    pub fn aliases(&self) -> impl Iterator<Item = &Alias> + Clone {
        self.entries.iter().map(|(a, _)| a)
    }

    pub fn get(&self, alias: &Alias) -> Option<&Destination> {
        self.position(alias.as_str()).map(|i| &self.entries[i].1)
    }

    /// Looks up raw user text, applying alias normalization first.
    pub fn lookup(&self, text: &str) -> Option<&Destination> {
        self.position(&normalize(text)).map(|i| &self.entries[i].1)
    }

    pub fn contains(&self, alias: &Alias) -> bool {
        self.position(alias.as_str()).is_some()
    }

    /// Returns a new mapping with `alias` bound to `destination`.
    ///
    /// An existing binding for the alias is dropped and the new one is
    /// appended, so order always reflects the last assignment.
    pub fn with_entry(&self, alias: Alias, destination: Destination) -> Self {
        let mut next = self.clone();
        next.assign(alias, destination);
        next
    }

    /// Returns a new mapping without `alias`. Absent aliases are not an error.
    pub fn without(&self, alias: &Alias) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(a, _)| a != alias)
                .cloned()
                .collect(),
        }
    }

    pub(crate) fn entries(&self) -> &[(Alias, Destination)] {
        &self.entries
    }

    pub(crate) fn assign(&mut self, alias: Alias, destination: Destination) {
        if let Some(i) = self.position(alias.as_str()) {
            self.entries.remove(i);
        }
        self.entries.push((alias, destination));
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.entries.iter().position(|(a, _)| a.as_str() == normalized)
    }
}

impl FromIterator<(Alias, Destination)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (Alias, Destination)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (alias, destination) in iter {
            mapping.assign(alias, destination);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (Alias, Destination);
    type IntoIter = std::vec::IntoIter<(Alias, Destination)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// Serialized as an ordered object, e.g. `{"google": "https://google.com"}`.
impl Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (alias, destination) in &self.entries {
            map.serialize_entry(alias, destination)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = Mapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of alias to destination URL")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut mapping = Mapping::new();
                while let Some((alias, destination)) =
                    access.next_entry::<Alias, Destination>()?
                {
                    mapping.assign(alias, destination);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

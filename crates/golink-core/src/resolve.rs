use crate::alias::{normalize, Alias};
use crate::destination::Destination;
use crate::error::DestinationError;
use crate::mapping::Mapping;
use tracing::trace;

/// Scheme assumed when a user types a bare domain.
const FALLBACK_SCHEME: &str = "https://";

/// The outcome of looking up one alias against a [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The alias text was empty or whitespace-only.
    Empty,
    Found(Destination),
    /// No such alias. `available` lists every alias in mapping order.
    NotFound {
        tried: String,
        available: Vec<Alias>,
    },
}

impl Resolution {
    pub fn destination(&self) -> Option<&Destination> {
        match self {
            Resolution::Found(destination) => Some(destination),
            Resolution::Empty | Resolution::NotFound { .. } => None,
        }
    }

    /// Comma-separated available aliases for a not-found message, or `none`.
    pub fn available_display(&self) -> Option<String> {
        match self {
            Resolution::NotFound { available, .. } => Some(display_available(available)),
            Resolution::Empty | Resolution::Found(_) => None,
        }
    }
}

/// Joins aliases as `a, b, c`, or returns `none` for an empty list.
pub fn display_available(aliases: &[Alias]) -> String {
    if aliases.is_empty() {
        return "none".to_owned();
    }
    aliases
        .iter()
        .map(Alias::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves committed alias text against `mapping`.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn resolve(mapping: &Mapping, alias_text: &str) -> Resolution {
    let tried = normalize(alias_text);
    if tried.is_empty() {
        return Resolution::Empty;
    }

    match mapping.lookup(&tried) {
        Some(destination) => {
            trace!(alias = %tried, url = %destination, "resolved go link");
            Resolution::Found(destination.clone())
        }
        None => {
            trace!(alias = %tried, "go link not found");
            Resolution::NotFound {
                tried,
                available: mapping.aliases().cloned().collect(),
            }
        }
    }
}

/// Validates a destination typed in for a single new go link.
///
/// If the trimmed text is not an absolute URL, it is retried once with
/// `https://` prepended. Bulk parsing never applies this fix.
pub fn normalize_destination_input(raw: &str) -> Result<Destination, DestinationError> {
    let trimmed = raw.trim();
    match Destination::new(trimmed) {
        Ok(destination) => Ok(destination),
        Err(DestinationError::Empty) => Err(DestinationError::Empty),
        Err(first) => {
            let with_scheme = format!("{FALLBACK_SCHEME}{trimmed}");
            Destination::new(&with_scheme).map_err(|_| first).inspect(|fixed| {
                trace!(input = %trimmed, url = %fixed, "inserted missing scheme");
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> Mapping {
        Mapping::try_from_pairs([
            ("google", "https://google.com"),
            ("youtube", "https://youtube.com"),
        ])
        .unwrap()
    }

    #[test]
    fn found() {
        let resolution = resolve(&mapping(), "google");
        assert_eq!(
            resolution,
            Resolution::Found(Destination::new("https://google.com").unwrap())
        );
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        let m = mapping();
        assert_eq!(resolve(&m, "  GOOGLE  "), resolve(&m, "google"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(resolve(&mapping(), ""), Resolution::Empty);
        assert_eq!(resolve(&mapping(), " \t "), Resolution::Empty);
    }

    #[test]
    fn not_found_lists_available_aliases() {
        let m = Mapping::try_from_pairs([("google", "https://google.com")]).unwrap();
        let resolution = resolve(&m, "bogus");
        assert_eq!(
            resolution,
            Resolution::NotFound {
                tried: "bogus".to_string(),
                available: vec![Alias::new("google").unwrap()],
            }
        );
        assert_eq!(resolution.available_display().as_deref(), Some("google"));
    }

    #[test]
    fn not_found_in_empty_mapping_renders_none() {
        let resolution = resolve(&Mapping::new(), "Bogus ");
        assert!(matches!(
            &resolution,
            Resolution::NotFound { tried, available } if tried == "bogus" && available.is_empty()
        ));
        assert_eq!(resolution.available_display().as_deref(), Some("none"));
    }

    #[test]
    fn destination_is_kept_as_is() {
        let d = normalize_destination_input("  https://example.com/a  ").unwrap();
        assert_eq!(d.as_str(), "https://example.com/a");
    }

    #[test]
    fn bare_domain_gets_https() {
        let d = normalize_destination_input("example.com").unwrap();
        assert_eq!(d.as_str(), "https://example.com");

        let d = normalize_destination_input("localhost:3000").unwrap();
        assert_eq!(d.as_str(), "https://localhost:3000");
    }

    #[test]
    fn hopeless_input_is_rejected() {
        assert!(matches!(
            normalize_destination_input("not a url at all"),
            Err(DestinationError::Invalid { .. })
        ));
        assert_eq!(
            normalize_destination_input("   "),
            Err(DestinationError::Empty)
        );
    }
}

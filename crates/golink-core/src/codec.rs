//! Line-oriented text format for bulk editing and migrating a [`Mapping`].
//!
//! Each line holds one `alias:destination` pair. The first colon on a line is
//! always the separator, so destinations may contain colons but aliases may
//! not. Blank lines are ignored and there is no header, footer, or trailing
//! newline requirement.

use crate::alias::Alias;
use crate::destination::Destination;
use crate::error::{AliasError, ParseError};
use crate::mapping::Mapping;
use tracing::trace;

const SEPARATOR: char = ':';

/// Formats `mapping` as one `alias:destination` line per entry.
///
/// An empty mapping formats to an empty string. No trailing newline is added.
pub fn format(mapping: &Mapping) -> String {
    mapping
        .iter()
        .map(|(alias, destination)| format!("{alias}{SEPARATOR}{destination}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the bulk text format into a [`Mapping`].
///
/// Every malformed line is a hard error; destinations are never auto-fixed
/// here. Duplicate aliases are allowed and the last line wins.
pub fn parse(text: &str) -> Result<Mapping, ParseError> {
    let content = text.trim();
    if content.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut mapping = Mapping::new();
    for (index, raw_line) in content.split('\n').enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (alias, destination) = parse_line(trimmed, line)?;
        trace!(line, alias = %alias, "parsed go link");
        mapping.assign(alias, destination);
    }

    if mapping.is_empty() {
        return Err(ParseError::NoEntries);
    }

    Ok(mapping)
}

fn parse_line(line_text: &str, line: usize) -> Result<(Alias, Destination), ParseError> {
    let Some((raw_alias, raw_destination)) = line_text.split_once(SEPARATOR) else {
        return Err(ParseError::MissingSeparator { line });
    };

    let raw_alias = raw_alias.trim();
    let raw_destination = raw_destination.trim();

    let alias = Alias::new(raw_alias).map_err(|e| match e {
        // the split guarantees no colon and the line split guarantees no newline
        AliasError::Empty | AliasError::ForbiddenCharacter(_) => {
            ParseError::MissingAlias { line }
        }
    })?;

    if raw_destination.is_empty() {
        return Err(ParseError::MissingDestination { line });
    }

    let destination =
        Destination::new(raw_destination).map_err(|_| ParseError::InvalidDestination {
            line,
            raw: raw_destination.to_owned(),
        })?;

    Ok((alias, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> Mapping {
        Mapping::try_from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn format_emits_lines_in_order() {
        let m = mapping(&[
            ("z", "https://z.com"),
            ("a", "https://a.com"),
            ("m", "https://m.com"),
        ]);
        assert_eq!(format(&m), "z:https://z.com\na:https://a.com\nm:https://m.com");
    }

    #[test]
    fn format_empty_and_single() {
        assert_eq!(format(&Mapping::new()), "");
        assert_eq!(
            format(&mapping(&[("google", "https://google.com")])),
            "google:https://google.com"
        );
    }

    #[test]
    fn parse_valid_text() {
        let parsed = parse("google:https://google.com\nyoutube:https://youtube.com").unwrap();
        assert_eq!(
            parsed,
            mapping(&[
                ("google", "https://google.com"),
                ("youtube", "https://youtube.com"),
            ])
        );
    }

    #[test]
    fn parse_lowercases_trims_and_skips_blank_lines() {
        let parsed =
            parse("\n  GOOGLE  :  https://google.com  \n\n\r\n  YouTube:https://youtube.com\n")
                .unwrap();
        assert_eq!(
            parsed,
            mapping(&[
                ("google", "https://google.com"),
                ("youtube", "https://youtube.com"),
            ])
        );
    }

    #[test]
    fn parse_splits_on_first_colon_only() {
        let parsed = parse("local:http://localhost:8080/path").unwrap();
        assert_eq!(
            parsed.lookup("local").map(Destination::as_str),
            Some("http://localhost:8080/path")
        );
    }

    #[test]
    fn duplicate_aliases_last_write_wins() {
        let parsed = parse("a:https://one.com\nb:https://b.com\nA:https://two.com").unwrap();
        assert_eq!(
            parsed,
            mapping(&[("b", "https://b.com"), ("a", "https://two.com")])
        );
    }

    #[test]
    fn parse_failures() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parse("   \n  "), Err(ParseError::EmptyInput));
        assert_eq!(parse("google"), Err(ParseError::MissingSeparator { line: 1 }));
        assert_eq!(parse(":https://x.com"), Err(ParseError::MissingAlias { line: 1 }));
        assert_eq!(parse("google:"), Err(ParseError::MissingDestination { line: 1 }));
        assert_eq!(
            parse("x:not-a-url"),
            Err(ParseError::InvalidDestination {
                line: 1,
                raw: "not-a-url".to_string()
            })
        );
    }

    #[test]
    fn error_line_numbers_count_blank_lines() {
        let err = parse("a:https://a.com\n\nbroken").unwrap_err();
        assert_eq!(err, ParseError::MissingSeparator { line: 3 });
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn bare_domain_is_not_auto_fixed() {
        assert!(matches!(
            parse("x:example.com"),
            Err(ParseError::InvalidDestination { line: 1, .. })
        ));
    }

    #[test]
    fn round_trip_preserves_entries_and_order() {
        let m = mapping(&[
            ("youtube", "https://youtube.com"),
            ("docs", "https://docs.rs/tokio?search=a:b"),
            ("team wiki", "https://wiki.example.com/Team"),
            ("google", "https://google.com"),
        ]);
        assert_eq!(parse(&format(&m)).unwrap(), m);
    }
}

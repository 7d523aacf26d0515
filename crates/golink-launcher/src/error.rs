use golink_core::{
    display_available, Alias, AliasError, Destination, DestinationError, NavigationError,
    ParseError, StoreError,
};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("please enter a go link")]
    EmptyAlias,
    #[error("go link \"{tried}\" not found. Available: {}", display_available(.available))]
    NotFound { tried: String, available: Vec<Alias> },
    #[error("could not navigate to {url}: {source}")]
    Navigation {
        url: Destination,
        #[source]
        source: NavigationError,
    },
    #[error("invalid go link name: {0}")]
    InvalidAlias(#[from] AliasError),
    #[error(transparent)]
    InvalidDestination(#[from] DestinationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_lists_aliases() {
        let err = SessionError::NotFound {
            tried: "bogus".to_string(),
            available: vec![Alias::new("google").unwrap(), Alias::new("youtube").unwrap()],
        };
        assert_eq!(
            err.to_string(),
            "go link \"bogus\" not found. Available: google, youtube"
        );
    }

    #[test]
    fn not_found_message_with_no_aliases_says_none() {
        let err = SessionError::NotFound {
            tried: "bogus".to_string(),
            available: vec![],
        };
        assert_eq!(err.to_string(), "go link \"bogus\" not found. Available: none");
    }
}

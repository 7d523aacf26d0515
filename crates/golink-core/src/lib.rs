//! Core types for go links: short aliases that resolve to URLs.
//!
//! Everything here is pure and synchronous except the [`AliasStore`] and
//! [`NavigationAdapter`] traits, which describe the host collaborators that
//! persist the mapping and open destinations.

pub mod alias;
pub mod codec;
pub mod destination;
pub mod error;
pub mod mapping;
pub mod navigation;
pub mod resolve;
pub mod store;
pub mod suggest;

pub use alias::Alias;
pub use destination::Destination;
pub use error::{
    AliasError, DestinationError, EntryError, NavigationError, ParseError, StoreError,
};
pub use mapping::Mapping;
pub use navigation::{NavigationAdapter, OpenMode};
pub use resolve::{display_available, normalize_destination_input, resolve, Resolution};
pub use store::AliasStore;
pub use suggest::{
    default_suggestion, hint, suggest, Suggestion, Suggestions, DEFAULT_HINT_COUNT,
    DEFAULT_SUGGESTION_LIMIT,
};

//! Session and host adapters for go links.
//!
//! [`Session`] ties an [`AliasStore`](golink_core::AliasStore) and a
//! [`NavigationAdapter`](golink_core::NavigationAdapter) to the pure core:
//! it answers typeahead queries, resolves aliases, opens destinations and
//! applies edits.

pub mod error;
pub mod navigator;
pub mod session;

pub use error::SessionError;
pub use navigator::{CommandNavigator, PrintNavigator};
pub use session::{Session, SessionOptions};

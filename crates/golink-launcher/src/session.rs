use crate::error::SessionError;
use golink_core::{
    codec, normalize_destination_input, resolve, suggest, Alias, AliasStore, Destination,
    Mapping, NavigationAdapter, OpenMode, Resolution, Suggestions, DEFAULT_HINT_COUNT,
    DEFAULT_SUGGESTION_LIMIT,
};
use golink_storage::default_mapping;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, SessionError>;

/// Tunables for a [`Session`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SessionOptions {
    /// Maximum number of suggestions per query.
    #[builder(default = DEFAULT_SUGGESTION_LIMIT)]
    pub suggest_limit: usize,

    /// Number of aliases listed in the hint prompt.
    #[builder(default = DEFAULT_HINT_COUNT)]
    pub hint_count: usize,

    /// Mapping used when the store cannot be loaded at startup.
    #[builder(default = default_mapping())]
    pub fallback: Mapping,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Holds the current [`Mapping`] and threads it through the pure
/// suggestion, resolution and codec functions.
///
/// Edits are read-then-replace: the latest mapping is loaded, a new mapping
/// is derived from it, and the whole mapping is saved. The held mapping is
/// only swapped once the save succeeded. An edit fails when the store
/// cannot be read.
#[derive(Debug)]
pub struct Session<S, N> {
    store: S,
    navigator: N,
    mapping: Mapping,
    options: SessionOptions,
}

impl<S: AliasStore, N: NavigationAdapter> Session<S, N> {
    /// Loads the mapping from `store` and starts a session.
    ///
    /// A failing load is not fatal: the session starts from
    /// [`SessionOptions::fallback`] so suggestions and lookups keep working.
    pub async fn start(store: S, navigator: N, options: SessionOptions) -> Self {
        let mapping = match store.load().await {
            Ok(mapping) => {
                debug!(count = mapping.len(), "loaded go links");
                mapping
            }
            Err(e) => {
                warn!(error = %e, "failed to load go links, using fallback mapping");
                options.fallback.clone()
            }
        };

        Self {
            store,
            navigator,
            mapping,
            options,
        }
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Re-reads the mapping from the store. On failure the held mapping is kept.
    pub async fn reload(&mut self) -> Result<()> {
        self.mapping = self.store.load().await?;
        Ok(())
    }

    /// Ranked suggestions for typeahead `query`.
    pub fn suggest(&self, query: &str) -> Suggestions<'_> {
        suggest(&self.mapping, query, self.options.suggest_limit)
    }

    /// See [`golink_core::default_suggestion`].
    pub fn default_suggestion(&self, query: &str) -> Option<String> {
        golink_core::default_suggestion(&self.mapping, query)
    }

    /// See [`golink_core::hint`].
    pub fn hint(&self) -> Option<String> {
        golink_core::hint(&self.mapping, self.options.hint_count)
    }

    pub fn resolve(&self, alias_text: &str) -> Resolution {
        resolve(&self.mapping, alias_text)
    }

    /// Resolves `alias_text`, turning empty and not-found outcomes into errors.
    pub fn lookup(&self, alias_text: &str) -> Result<Destination> {
        match self.resolve(alias_text) {
            Resolution::Found(destination) => Ok(destination),
            Resolution::Empty => Err(SessionError::EmptyAlias),
            Resolution::NotFound { tried, available } => {
                Err(SessionError::NotFound { tried, available })
            }
        }
    }

    /// Resolves `alias_text` and opens the destination with `mode`.
    pub async fn go(&self, alias_text: &str, mode: OpenMode) -> Result<Destination> {
        let destination = self.lookup(alias_text)?;

        if let Err(source) = self.navigator.navigate(&destination, mode).await {
            warn!(url = %destination, error = %source, "navigation failed");
            return Err(SessionError::Navigation {
                url: destination,
                source,
            });
        }

        info!(alias = %alias_text.trim(), url = %destination, mode = %mode, "opened go link");
        Ok(destination)
    }

    /// Adds or replaces a single go link.
    ///
    /// A bare domain such as `example.com` is accepted and stored with an
    /// `https://` scheme.
    pub async fn add(&mut self, alias: &str, destination: &str) -> Result<(Alias, Destination)> {
        let alias = Alias::new(alias)?;
        let destination = normalize_destination_input(destination)?;

        let next = self
            .latest()
            .await?
            .with_entry(alias.clone(), destination.clone());
        self.commit(next).await?;

        info!(alias = %alias, url = %destination, "saved go link");
        Ok((alias, destination))
    }

    /// Removes a go link. Returns `false` if it did not exist.
    pub async fn remove(&mut self, alias: &str) -> Result<bool> {
        let alias = Alias::new(alias)?;
        let latest = self.latest().await?;

        if !latest.contains(&alias) {
            debug!(alias = %alias, "nothing to remove");
            self.mapping = latest;
            return Ok(false);
        }

        self.commit(latest.without(&alias)).await?;
        info!(alias = %alias, "removed go link");
        Ok(true)
    }

    /// Replaces every go link with the bulk text `text`.
    ///
    /// Returns the number of go links saved. Any malformed line rejects the
    /// whole edit.
    pub async fn replace_from_text(&mut self, text: &str) -> Result<usize> {
        let next = codec::parse(text)?;
        let count = next.len();
        self.commit(next).await?;

        info!(count, "saved go links from text");
        Ok(count)
    }

    /// The held mapping in the bulk text format.
    pub fn export_text(&self) -> String {
        codec::format(&self.mapping)
    }

    /// The freshest stored mapping to derive an edit from.
    ///
    /// Errors instead of using the held mapping, which may be the startup
    /// fallback rather than what the store holds.
    async fn latest(&self) -> Result<Mapping> {
        self.store.load().await.map_err(|e| {
            warn!(error = %e, "failed to reload go links before edit");
            SessionError::from(e)
        })
    }

    async fn commit(&mut self, next: Mapping) -> Result<()> {
        self.store.save(&next).await?;
        self.mapping = next;
        Ok(())
    }
}

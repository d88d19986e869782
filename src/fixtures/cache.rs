//! Per-view fixture cache.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::FixtureSource;
use crate::fixtures::client::FixtureClient;
use crate::fixtures::errors::FixtureError;

/// Holds one loaded fixture document for the lifetime of a view.
///
/// The first [`get_or_load`](Self::get_or_load) fetches the document;
/// later calls hand out the cached copy until [`invalidate`](Self::invalidate)
/// is called. Failed loads are not cached.
#[derive(Debug, Clone)]
pub struct FixtureCache<T> {
    source: FixtureSource,
    value: Option<Arc<T>>,
}

impl<T: DeserializeOwned> FixtureCache<T> {
    /// Creates an empty cache for `source`.
    #[must_use]
    pub const fn new(source: FixtureSource) -> Self {
        Self {
            source,
            value: None,
        }
    }

    /// Returns the fixture source.
    #[must_use]
    pub const fn source(&self) -> &FixtureSource {
        &self.source
    }

    /// Returns `true` once a document has been loaded and not invalidated.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the cached document, loading it first if needed.
    ///
    /// # Errors
    ///
    /// Returns the [`FixtureError`] of the underlying fetch.
    pub async fn get_or_load(&mut self, client: &FixtureClient) -> Result<Arc<T>, FixtureError> {
        if let Some(value) = &self.value {
            tracing::debug!(source = %self.source, "fixture served from cache");
            return Ok(Arc::clone(value));
        }

        let value = Arc::new(client.fetch::<T>(&self.source).await?);
        self.value = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Drops the cached document so the next load fetches again.
    pub fn invalidate(&mut self) {
        self.value = None;
    }
}

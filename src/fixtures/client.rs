//! Fixture loader.
//!
//! This module provides the [`FixtureClient`] type, which reads fixture
//! documents from disk or fetches them over HTTP.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::{CatalogConfig, FixtureSource};
use crate::fixtures::errors::FixtureError;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads fixture documents.
///
/// File sources are read with `tokio::fs`; URL sources are fetched with
/// `reqwest`. Only 429 and 5xx responses are retried, and only up to the
/// configured number of tries.
///
/// # Thread Safety
///
/// `FixtureClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_admin::fixtures::FixtureClient;
/// use catalog_admin::model::CatalogDocument;
/// use catalog_admin::FixtureSource;
///
/// let client = FixtureClient::new(1)?;
/// let source = FixtureSource::new("public/json/products.json")?;
/// let document: CatalogDocument = client.fetch(&source).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FixtureClient {
    client: reqwest::Client,
    tries: u32,
    default_headers: HashMap<String, String>,
}

// Verify FixtureClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FixtureClient>();
};

impl FixtureClient {
    /// Creates a client that makes at most `tries` attempts per URL fetch.
    ///
    /// A value of zero is treated as one.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Network`] if the HTTP client cannot be built.
    pub fn new(tries: u32) -> Result<Self, FixtureError> {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Catalog Admin v{CRATE_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            tries: tries.max(1),
            default_headers,
        })
    }

    /// Creates a client using the configured number of tries.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Network`] if the HTTP client cannot be built.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, FixtureError> {
        Self::new(config.fetch_tries())
    }

    /// Returns the maximum number of attempts per URL fetch.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the headers sent with every URL fetch.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Loads and deserializes a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the source cannot be read or fetched, or
    /// if its body does not deserialize into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, source: &FixtureSource) -> Result<T, FixtureError> {
        tracing::debug!(source = %source, "loading fixture");

        let body = match source {
            FixtureSource::Url { url, .. } => self.fetch_url(url).await?,
            FixtureSource::File(path) => Self::read_file(path).await?,
        };

        serde_json::from_str(&body).map_err(|source_err| FixtureError::Parse {
            source_name: source.to_string(),
            source: source_err,
        })
    }

    async fn read_file(path: &Path) -> Result<String, FixtureError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FixtureError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn fetch_url(&self, url: &str) -> Result<String, FixtureError> {
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = self.client.get(url);
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }

            let res = req_builder.send().await?;
            let code = res.status().as_u16();

            if res.status().is_success() {
                return Ok(res.text().await?);
            }

            let should_retry = code == 429 || code >= 500;
            if !should_retry {
                return Err(FixtureError::Response {
                    code,
                    url: url.to_string(),
                });
            }

            if tries >= self.tries {
                if self.tries == 1 {
                    return Err(FixtureError::Response {
                        code,
                        url: url.to_string(),
                    });
                }
                return Err(FixtureError::MaxRetries {
                    code,
                    tries: self.tries,
                    url: url.to_string(),
                });
            }

            tracing::warn!(url, code, attempt = tries, "fixture fetch failed, retrying");
            tokio::time::sleep(Duration::from_secs(RETRY_WAIT_TIME)).await;
        }
    }
}

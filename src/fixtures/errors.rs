//! Error types for fixture loading.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::fixtures::{FixtureClient, FixtureError};
//!
//! match client.fetch::<CatalogDocument>(&source).await {
//!     Ok(document) => println!("{} products", document.products.len()),
//!     Err(FixtureError::Response { code, url }) => println!("{url} answered {code}"),
//!     Err(FixtureError::Parse { source_name, .. }) => println!("{source_name} is not valid JSON"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a fixture document.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The HTTP client could not be built or the request failed in transit.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The fixture URL answered with a non-success status.
    #[error("Fixture request to {url} failed with status {code}")]
    Response {
        /// HTTP status code.
        code: u16,
        /// Requested URL.
        url: String,
    },

    /// Server errors persisted through every configured attempt.
    #[error("Exceeded maximum retry count of {tries} fetching {url}. Last status: {code}")]
    MaxRetries {
        /// Status code of the last response.
        code: u16,
        /// Attempts made.
        tries: u32,
        /// Requested URL.
        url: String,
    },

    /// The fixture file could not be read.
    #[error("Failed to read fixture file {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fixture body is not the expected JSON shape.
    #[error("Fixture {source_name} is not valid: {source}")]
    Parse {
        /// URL or path of the fixture.
        source_name: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

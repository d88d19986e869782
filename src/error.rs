//! Configuration error types for the catalog admin core.
//!
//! Errors raised by the other modules live next to them
//! ([`FixtureError`](crate::fixtures::FixtureError),
//! [`CatalogError`](crate::catalog::CatalogError),
//! [`DraftError`](crate::form::DraftError)). This module only covers
//! configuration and validation of configuration values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::{ConfigError, PageSize};
//!
//! let result = PageSize::new(0);
//! assert!(matches!(result, Err(ConfigError::InvalidPageSize { size: 0 })));
//! ```

use thiserror::Error;

/// Errors that can occur during catalog configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A fixture source was empty.
    #[error("Fixture source cannot be empty. Provide a file path or an http(s) URL.")]
    EmptyFixtureSource,

    /// A fixture URL was malformed.
    #[error("Invalid fixture URL '{url}'. Expected format: 'https://host/path/products.json'.")]
    InvalidFixtureUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Page size must be at least one.
    #[error("Invalid page size {size}. The page size must be at least 1.")]
    InvalidPageSize {
        /// The rejected page size.
        size: usize,
    },

    /// Fetch tries must be at least one.
    #[error("Invalid fetch tries {tries}. At least one attempt is required.")]
    InvalidFetchTries {
        /// The rejected number of tries.
        tries: u32,
    },

    /// Export file name cannot be empty.
    #[error("Export file name cannot be empty.")]
    EmptyExportFileName,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

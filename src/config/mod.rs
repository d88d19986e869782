//! Configuration types for the catalog admin core.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CatalogConfig`]: The configuration struct holding fixture sources and list settings
//! - [`CatalogConfigBuilder`]: A builder for constructing [`CatalogConfig`] instances
//! - [`FixtureSource`]: A validated file path or http(s) URL
//! - [`PageSize`]: A validated, non-zero page size
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::{CatalogConfig, FixtureSource, PageSize};
//!
//! let config = CatalogConfig::builder()
//!     .products_fixture(FixtureSource::new("public/json/products.json").unwrap())
//!     .page_size(PageSize::new(10).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size().get(), 10);
//! ```

mod newtypes;

pub use newtypes::{FixtureSource, PageSize};

use crate::error::ConfigError;

/// Default file name of the CSV export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "products.csv";

/// Configuration for the catalog view and its collaborators.
///
/// # Thread Safety
///
/// `CatalogConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    products_fixture: FixtureSource,
    menu_fixture: Option<FixtureSource>,
    page_size: PageSize,
    export_file_name: String,
    fetch_tries: u32,
}

impl CatalogConfig {
    /// Creates a new builder for constructing a `CatalogConfig`.
    #[must_use]
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Returns the source of the products fixture document.
    #[must_use]
    pub const fn products_fixture(&self) -> &FixtureSource {
        &self.products_fixture
    }

    /// Returns the source of the sidebar menu fixture, if configured.
    #[must_use]
    pub const fn menu_fixture(&self) -> Option<&FixtureSource> {
        self.menu_fixture.as_ref()
    }

    /// Returns the number of rows per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the file name used for CSV exports.
    #[must_use]
    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    /// Returns how many attempts a fixture fetch makes before giving up.
    #[must_use]
    pub const fn fetch_tries(&self) -> u32 {
        self.fetch_tries
    }
}

// Verify CatalogConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogConfig>();
};

/// Builder for constructing [`CatalogConfig`] instances.
///
/// The only required field is `products_fixture`.
///
/// # Defaults
///
/// - `menu_fixture`: `None`
/// - `page_size`: 3
/// - `export_file_name`: `products.csv`
/// - `fetch_tries`: 1 (no automatic retry)
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    products_fixture: Option<FixtureSource>,
    menu_fixture: Option<FixtureSource>,
    page_size: Option<PageSize>,
    export_file_name: Option<String>,
    fetch_tries: Option<u32>,
}

impl CatalogConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the products fixture source (required).
    #[must_use]
    pub fn products_fixture(mut self, source: FixtureSource) -> Self {
        self.products_fixture = Some(source);
        self
    }

    /// Sets the sidebar menu fixture source.
    #[must_use]
    pub fn menu_fixture(mut self, source: FixtureSource) -> Self {
        self.menu_fixture = Some(source);
        self
    }

    /// Sets the number of rows per page.
    #[must_use]
    pub const fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the CSV export file name.
    #[must_use]
    pub fn export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = Some(name.into());
        self
    }

    /// Sets how many attempts a fixture fetch makes.
    ///
    /// Only rate-limited (429) and server error (5xx) responses are retried.
    #[must_use]
    pub const fn fetch_tries(mut self, tries: u32) -> Self {
        self.fetch_tries = Some(tries);
        self
    }

    /// Builds the [`CatalogConfig`], validating the collected values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `products_fixture`
    /// is not set, [`ConfigError::EmptyExportFileName`] for a blank export
    /// name and [`ConfigError::InvalidFetchTries`] for zero tries.
    pub fn build(self) -> Result<CatalogConfig, ConfigError> {
        let products_fixture = self
            .products_fixture
            .ok_or(ConfigError::MissingRequiredField {
                field: "products_fixture",
            })?;

        let export_file_name = match self.export_file_name {
            Some(name) if name.trim().is_empty() => return Err(ConfigError::EmptyExportFileName),
            Some(name) => name,
            None => DEFAULT_EXPORT_FILE_NAME.to_string(),
        };

        let fetch_tries = self.fetch_tries.unwrap_or(1);
        if fetch_tries == 0 {
            return Err(ConfigError::InvalidFetchTries { tries: fetch_tries });
        }

        Ok(CatalogConfig {
            products_fixture,
            menu_fixture: self.menu_fixture,
            page_size: self.page_size.unwrap_or_default(),
            export_file_name,
            fetch_tries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> FixtureSource {
        FixtureSource::new("public/json/products.json").unwrap()
    }

    #[test]
    fn test_builder_requires_products_fixture() {
        let result = CatalogConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "products_fixture"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = CatalogConfig::builder()
            .products_fixture(products())
            .build()
            .unwrap();

        assert_eq!(config.page_size().get(), 3);
        assert_eq!(config.export_file_name(), "products.csv");
        assert_eq!(config.fetch_tries(), 1);
        assert!(config.menu_fixture().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let menu = FixtureSource::new("https://example.com/json/menu.json").unwrap();

        let config = CatalogConfig::builder()
            .products_fixture(products())
            .menu_fixture(menu.clone())
            .page_size(PageSize::new(25).unwrap())
            .export_file_name("catalog.csv")
            .fetch_tries(3)
            .build()
            .unwrap();

        assert_eq!(config.menu_fixture(), Some(&menu));
        assert_eq!(config.page_size().get(), 25);
        assert_eq!(config.export_file_name(), "catalog.csv");
        assert_eq!(config.fetch_tries(), 3);
    }

    #[test]
    fn test_builder_rejects_blank_export_name() {
        let result = CatalogConfig::builder()
            .products_fixture(products())
            .export_file_name("  ")
            .build();

        assert!(matches!(result, Err(ConfigError::EmptyExportFileName)));
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = CatalogConfig::builder()
            .products_fixture(products())
            .fetch_tries(0)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidFetchTries { tries: 0 })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogConfig>();
    }
}

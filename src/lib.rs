//! # Catalog Admin
//!
//! The state and logic behind an e-commerce admin's product list: loading
//! fixture data, filtering, sorting, pagination, row selection, bulk export
//! and delete, the add / edit form and the sidebar menu state.
//!
//! Rendering is left to the embedding UI. Everything here is plain state
//! driven through `&mut self` methods; user prompts and navigation go
//! through the injected [`dialog::Dialog`] and [`navigation::Navigator`]
//! capabilities.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CatalogConfig`] and [`CatalogConfigBuilder`]
//! - Fixture loading from files or http(s) URLs via [`fixtures`]
//! - The product list controller via [`catalog::CatalogController`]
//! - The product form via [`form::ProductDraft`]
//! - Persistent sidebar state via [`ui_state::SidebarState`]
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_admin::{CatalogConfig, FixtureSource, PageSize};
//!
//! let config = CatalogConfig::builder()
//!     .products_fixture(FixtureSource::new("public/json/products.json").unwrap())
//!     .page_size(PageSize::new(5).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.export_file_name(), "products.csv");
//! ```
//!
//! ## Loading and Driving the List
//!
//! ```rust,ignore
//! use catalog_admin::catalog::{CatalogController, LoadState, SortOrder};
//! use catalog_admin::fixtures::FixtureClient;
//!
//! let client = FixtureClient::from_config(&config)?;
//! let mut catalog = CatalogController::new(&config);
//!
//! if let LoadState::Failed { message } = catalog.load(&client).await.clone() {
//!     eprintln!("could not load products: {message}");
//!     catalog.reload(&client).await;
//! }
//!
//! catalog.set_search_query("watch");
//! catalog.set_sort_order(Some(SortOrder::Ascending));
//! for product in catalog.current_page() {
//!     println!("{} {}", product.name, product.display_price());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration, storage and navigation are passed explicitly
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Derived, not patched**: The visible rows are recomputed from the product list and filter on every read
//! - **Thread-safe**: Configuration and clients are `Send + Sync`

pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod fixtures;
pub mod form;
pub mod model;
pub mod navigation;
pub mod ui_state;

// Re-export configuration types at crate root for convenience
pub use config::{CatalogConfig, CatalogConfigBuilder, FixtureSource, PageSize};
pub use error::ConfigError;

// Re-export the main entry points
pub use catalog::{CatalogController, CatalogError, LoadState};
pub use fixtures::{FixtureClient, FixtureError};
pub use form::{DraftError, ProductDraft};
pub use model::{Product, ProductId};

//! The product list: filtering, sorting, pagination, selection and bulk actions.
//!
//! # Overview
//!
//! - [`CatalogController`]: owns the product list and keeps the derived view,
//!   the page and the selection consistent
//! - [`FilterState`] and [`derive_view`]: the pure filter/sort derivation
//! - [`Pagination`] and [`PageWindow`]: fixed-size paging
//! - [`SelectionSet`]: checked rows
//! - [`ExportArtifact`] and [`build_export`]: CSV export
//! - [`CatalogError`]: non-fatal errors of the above
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::catalog::{CatalogController, PriceRange};
//! use catalog_admin::dialog::ScriptedDialog;
//! use catalog_admin::model::CatalogDocument;
//! use catalog_admin::PageSize;
//!
//! let document: CatalogDocument = serde_json::from_str(r#"{
//!     "products": [{
//!         "id": "1", "name": "Smart Watch", "categoryId": "1",
//!         "details": {"sku": "WCH-1", "statusId": "1", "basePrice": 120,
//!                     "quantity": 4, "addedDate": "2024-01-15"}
//!     }],
//!     "categories": {"1": {"id": "1", "name": "Watch"}},
//!     "productStatus": {"1": {"id": "1", "name": "Published"}}
//! }"#).unwrap();
//!
//! let mut catalog = CatalogController::from_document(document, PageSize::default());
//! catalog.set_price_range(Some(PriceRange::new(50.0, 200.0).unwrap()));
//! assert_eq!(catalog.filtered_count(), 1);
//!
//! let mut dialog = ScriptedDialog::accepting();
//! assert!(catalog.export(&mut dialog).is_err());
//! assert_eq!(dialog.alerts().len(), 1);
//! ```

mod controller;
mod errors;
mod export;
mod filter;
mod pagination;
mod selection;

pub use controller::{CatalogController, LoadState, ViewModal};
pub use errors::{BulkAction, CatalogError};
pub use export::{build_export, ExportArtifact, EXPORT_HEADER, EXPORT_MIME_TYPE};
pub use filter::{derive_view, FilterState, PriceRange, SortOrder};
pub use pagination::{PageWindow, Pagination};
pub use selection::SelectionSet;

//! The add / edit product form.
//!
//! [`ProductDraft`] holds the form inputs as typed. It opens blank for the
//! create route or prefilled for the edit route, validates into a
//! [`DraftError`] and navigates back to the product list on save.
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::form::{ProductDraft, SaveOutcome};
//! use catalog_admin::navigation::RecordingNavigator;
//!
//! let mut draft = ProductDraft::blank();
//! assert!(draft.validate().is_err());
//!
//! draft.name = "Desk Lamp".to_string();
//! draft.sku = "LMP-1".to_string();
//! draft.base_price = "39.99".to_string();
//! draft.quantity = "12".to_string();
//!
//! let mut nav = RecordingNavigator::default();
//! assert_eq!(draft.save(&mut nav), Ok(SaveOutcome::Created));
//! assert_eq!(nav.last(), Some("/products"));
//! ```

mod draft;
mod errors;

pub use draft::{ProductDraft, SaveOutcome, ShippingDraft, NO_DISCOUNT, TAX_FREE};
pub use errors::DraftError;

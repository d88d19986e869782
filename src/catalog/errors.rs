//! Error types for catalog operations.

use std::fmt;

use thiserror::Error;

use crate::model::ProductId;

/// A bulk action applied to the whole selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// CSV export of the selected products.
    Export,
    /// Deletion of the selected products.
    Delete,
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export => write!(f, "export"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Errors returned by the catalog controller.
///
/// None of them are fatal: the controller stays usable after any error and
/// no state changes when one is returned.
///
/// # Example
///
/// ```rust
/// use catalog_admin::catalog::{BulkAction, CatalogError};
///
/// let error = CatalogError::EmptySelection { action: BulkAction::Export };
/// assert_eq!(error.to_string(), "Cannot export: no products are selected");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// A bulk action was requested with nothing selected.
    #[error("Cannot {action}: no products are selected")]
    EmptySelection {
        /// The rejected action.
        action: BulkAction,
    },

    /// No loaded product has this identifier.
    #[error("Product with id {id} not found")]
    NotFound {
        /// The identifier that was requested.
        id: ProductId,
    },

    /// Price bounds were reversed, negative, or not finite.
    #[error("Invalid price range {min}..={max}: bounds must be finite, non-negative and min <= max")]
    InvalidPriceRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// A product's base price is negative or not finite.
    #[error("Product {id} has invalid base price {price}: must be finite and non-negative")]
    InvalidPrice {
        /// The rejected product.
        id: ProductId,
        /// The rejected price.
        price: f64,
    },

    /// A product is already being viewed; close it first.
    #[error("A product is already open in the detail view")]
    ViewAlreadyOpen,

    /// The CSV export could not be written.
    #[error("Failed to build export: {reason}")]
    Export {
        /// What went wrong.
        reason: String,
    },
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Export {
            reason: err.to_string(),
        }
    }
}

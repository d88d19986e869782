//! Errors raised by the product draft.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::ProductId;

/// Errors from building or saving a [`ProductDraft`](super::ProductDraft).
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use catalog_admin::form::DraftError;
///
/// let mut errors = BTreeMap::new();
/// errors.insert("name".to_string(), vec!["is required".to_string()]);
///
/// let error = DraftError::Invalid { errors };
/// assert!(error.to_string().contains("1 invalid field"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// One or more fields failed validation.
    ///
    /// Keys are the camelCase field names, values the messages for that
    /// field.
    #[error("Product draft has {} invalid field(s): {}", errors.len(), field_list(errors))]
    Invalid {
        /// Field name to validation messages.
        errors: BTreeMap<String, Vec<String>>,
    },

    /// The edit route names a product that is not loaded.
    #[error("Cannot edit product '{id}': it is not in the catalog")]
    UnknownProduct {
        /// The requested product identifier.
        id: ProductId,
    },

    /// The route does not open the product form.
    #[error("Route '{path}' does not open the product form")]
    NotAFormRoute {
        /// Path of the route.
        path: String,
    },
}

impl DraftError {
    /// Messages recorded for `field`, empty for other variants.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            Self::Invalid { errors } => errors.get(field).map_or(&[], Vec::as_slice),
            _ => &[],
        }
    }
}

fn field_list(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

//! Top-level fixture documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, StatusId};
use super::menu::MenuItem;
use super::product::Product;
use super::reference::{Category, ReferenceData, Status};

/// The products fixture: `{ "products": [...], "categories": {...}, "productStatus": {...} }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Products in fixture order.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Category lookup keyed by identifier.
    #[serde(default)]
    pub categories: BTreeMap<CategoryId, Category>,

    /// Status lookup keyed by identifier.
    #[serde(default)]
    pub product_status: BTreeMap<StatusId, Status>,
}

impl CatalogDocument {
    /// Splits the document into the product list and the reference lookups.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Product>, ReferenceData) {
        (
            self.products,
            ReferenceData::new(self.categories, self.product_status),
        )
    }
}

/// The sidebar menu fixture, a bare JSON array of menu items.
pub type MenuDocument = Vec<MenuItem>;

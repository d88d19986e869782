//! Product records as they appear in the products fixture.
//!
//! The fixture uses camelCase keys and nests the commercial fields under
//! `details`:
//!
//! ```json
//! {
//!   "id": "p-001",
//!   "name": "Smart Watch",
//!   "categoryId": "1",
//!   "media": ["/images/watch.png"],
//!   "variations": [{ "type": "Color", "value": "Black" }],
//!   "details": {
//!     "sku": "SKU-1001",
//!     "statusId": "1",
//!     "basePrice": 129.5,
//!     "quantity": 40,
//!     "addedDate": "2024-01-15"
//!   }
//! }
//! ```

use chrono::{DateTime, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{CategoryId, ProductId, StatusId};

/// A (type, value) variation pair such as `("Color", "Black")`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variation {
    /// The variation axis, e.g. "Color" or "Size".
    #[serde(rename = "type")]
    pub kind: String,
    /// The value on that axis.
    pub value: String,
}

/// Discount settings of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Discount {
    /// Discount kind as shown in the form ("No Discount", "Percentage", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Percentage off, 0..=100.
    #[serde(default)]
    pub percentage: f64,
}

/// Shipping dimensions of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    /// Whether the product ships physically.
    #[serde(default)]
    pub is_physical_product: bool,
}

/// Commercial details nested under `details` in the fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    /// Stock keeping unit.
    pub sku: String,

    /// Reference into the status lookup.
    pub status_id: StatusId,

    /// Base price, never negative.
    #[serde(deserialize_with = "non_negative_price")]
    pub base_price: f64,

    /// Units in stock.
    pub quantity: u32,

    /// Creation timestamp, kept verbatim as written in the fixture.
    pub added_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<f64>,
}

/// Returns `true` for a finite price of zero or more.
pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

fn non_negative_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = f64::deserialize(deserializer)?;
    if is_valid_price(price) {
        Ok(price)
    } else {
        Err(D::Error::custom(format!(
            "basePrice must be a non-negative number, got {price}"
        )))
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Reference into the category lookup.
    pub category_id: CategoryId,

    /// Commercial details.
    pub details: ProductDetails,

    /// Media references (image URLs). The first one is the thumbnail.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<String>,

    /// Variation pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<Variation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
}

impl Product {
    /// Returns the SKU.
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.details.sku
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn status_id(&self) -> &StatusId {
        &self.details.status_id
    }

    /// Returns the base price.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.details.base_price
    }

    /// Returns the stock quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.details.quantity
    }

    /// Returns the thumbnail reference, if the product has media.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }

    /// Price with two decimals, as used in exports (`129.50`).
    #[must_use]
    pub fn price_text(&self) -> String {
        format!("{:.2}", self.details.base_price)
    }

    /// Price as displayed in the list (`$129.50`).
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", self.price_text())
    }

    /// Parses `addedDate` as either an RFC 3339 timestamp or a plain
    /// `YYYY-MM-DD` date.
    #[must_use]
    pub fn added_on(&self) -> Option<NaiveDate> {
        let raw = self.details.added_date.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Creation date in `15 Jan 2024` form, or the raw value when it does
    /// not parse.
    #[must_use]
    pub fn display_added_date(&self) -> String {
        self.added_on().map_or_else(
            || self.details.added_date.clone(),
            |date| date.format("%d %b %Y").to_string(),
        )
    }

    /// Variant summary shown under the product name.
    #[must_use]
    pub fn variant_label(&self) -> String {
        match self.variations.len() {
            0 => "No Variants".to_string(),
            1 => "1 Variant".to_string(),
            n => format!("{n} Variants"),
        }
    }

    /// Case-insensitive substring match against name and SKU.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.details.sku.to_lowercase().contains(needle)
    }
}

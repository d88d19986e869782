//! The add / edit product form.

use std::collections::BTreeMap;

use crate::catalog::CatalogController;
use crate::form::errors::DraftError;
use crate::model::{CategoryId, Discount, Product, ProductDetails, ProductId, Shipping, StatusId, Variation};
use crate::navigation::{Navigator, Route};

/// Discount kind of a product without a discount.
pub const NO_DISCOUNT: &str = "No Discount";

/// Tax class of an untaxed product.
pub const TAX_FREE: &str = "Tax Free";

/// Shipping inputs of the form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDraft {
    pub weight: String,
    pub height: String,
    pub length: String,
    pub width: String,
    pub is_physical_product: bool,
}

/// What [`ProductDraft::save`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new product was submitted.
    Created,
    /// An existing product was submitted.
    Updated {
        /// The edited product.
        id: ProductId,
    },
}

/// The product form.
///
/// Numeric inputs are kept as typed and only parsed by
/// [`validate`](Self::validate), so a half-typed value never loses
/// keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    editing: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub base_price: String,
    pub sku: String,
    pub barcode: String,
    pub quantity: String,
    pub category_id: String,
    pub status_id: String,
    pub discount_type: String,
    pub discount_percentage: String,
    pub tax_class: String,
    pub vat_amount: String,
    pub shipping: ShippingDraft,
    pub variations: Vec<Variation>,
}

struct Parsed {
    base_price: f64,
    quantity: u32,
    discount_percentage: f64,
    vat_amount: Option<f64>,
    shipping: Shipping,
}

impl ProductDraft {
    /// An empty form in create mode.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            editing: None,
            name: String::new(),
            description: String::new(),
            base_price: String::new(),
            sku: String::new(),
            barcode: String::new(),
            quantity: String::new(),
            category_id: String::new(),
            status_id: String::new(),
            discount_type: NO_DISCOUNT.to_string(),
            discount_percentage: String::new(),
            tax_class: TAX_FREE.to_string(),
            vat_amount: String::new(),
            shipping: ShippingDraft::default(),
            variations: Vec::new(),
        }
    }

    /// A form in edit mode, prefilled from `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        let details = &product.details;
        let discount = details.discount.as_ref().filter(|d| !d.kind.is_empty());
        let shipping = product.shipping.clone().unwrap_or_default();
        let dimension = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

        Self {
            editing: Some(product.id.clone()),
            name: product.name.clone(),
            description: details.description.clone().unwrap_or_default(),
            base_price: details.base_price.to_string(),
            sku: details.sku.clone(),
            barcode: details.barcode.clone().unwrap_or_default(),
            quantity: details.quantity.to_string(),
            category_id: product.category_id.to_string(),
            status_id: details.status_id.to_string(),
            discount_type: discount.map_or_else(|| NO_DISCOUNT.to_string(), |d| d.kind.clone()),
            discount_percentage: discount.map_or(0.0, |d| d.percentage).to_string(),
            tax_class: details
                .tax_class
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| TAX_FREE.to_string()),
            vat_amount: details.vat_amount.unwrap_or(0.0).to_string(),
            shipping: ShippingDraft {
                weight: dimension(shipping.weight),
                height: dimension(shipping.height),
                length: dimension(shipping.length),
                width: dimension(shipping.width),
                is_physical_product: shipping.is_physical_product,
            },
            variations: product.variations.clone(),
        }
    }

    /// Opens the form for a route: blank for the create route, prefilled
    /// from the catalog for the edit route.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnknownProduct`] when the edited product is not
    /// loaded, and [`DraftError::NotAFormRoute`] for other routes.
    pub fn for_route(route: &Route, catalog: &CatalogController) -> Result<Self, DraftError> {
        match route {
            Route::CreateProduct => Ok(Self::blank()),
            Route::EditProduct(id) => catalog
                .product(id)
                .map(Self::from_product)
                .ok_or_else(|| DraftError::UnknownProduct { id: id.clone() }),
            other => Err(DraftError::NotAFormRoute { path: other.path() }),
        }
    }

    /// Returns `true` when the form edits an existing product.
    #[must_use]
    pub const fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    /// The edited product, in edit mode.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        self.editing.as_ref()
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Invalid`] with the messages of every failing
    /// field.
    pub fn validate(&self) -> Result<(), DraftError> {
        self.parse().map(|_| ())
    }

    /// Validates the form, then navigates back to the product list.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Invalid`] without navigating when a field fails
    /// validation.
    pub fn save(&self, nav: &mut impl Navigator) -> Result<SaveOutcome, DraftError> {
        self.validate()?;

        let outcome = match &self.editing {
            Some(id) => {
                tracing::info!(id = %id, "updated product");
                SaveOutcome::Updated { id: id.clone() }
            }
            None => {
                tracing::info!(name = %self.name, "created product");
                SaveOutcome::Created
            }
        };

        nav.go(&Route::Products);
        Ok(outcome)
    }

    /// Writes the form into `product`, keeping its identifier, added date
    /// and media.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Invalid`] and leaves `product` untouched when a
    /// field fails validation.
    pub fn apply_to(&self, product: &mut Product) -> Result<(), DraftError> {
        let parsed = self.parse()?;

        product.name = self.name.trim().to_string();
        product.category_id = CategoryId::new(self.category_id.trim());
        product.variations = self.variations.clone();
        product.shipping = Some(parsed.shipping).filter(|s| *s != Shipping::default());

        let details = &mut product.details;
        details.sku = self.sku.trim().to_string();
        details.status_id = StatusId::new(self.status_id.trim());
        details.base_price = parsed.base_price;
        details.quantity = parsed.quantity;
        details.description = non_empty(&self.description);
        details.barcode = non_empty(&self.barcode);
        details.discount = self.discount(parsed.discount_percentage);
        details.tax_class = non_empty(&self.tax_class);
        details.vat_amount = parsed.vat_amount;
        Ok(())
    }

    /// Builds a new product from the form.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Invalid`] when a field fails validation.
    pub fn into_product(
        &self,
        id: ProductId,
        added_date: impl Into<String>,
    ) -> Result<Product, DraftError> {
        let mut product = Product {
            id,
            name: String::new(),
            category_id: CategoryId::new(""),
            details: ProductDetails {
                sku: String::new(),
                status_id: StatusId::new(""),
                base_price: 0.0,
                quantity: 0,
                added_date: added_date.into(),
                description: None,
                barcode: None,
                discount: None,
                tax_class: None,
                vat_amount: None,
            },
            media: Vec::new(),
            variations: Vec::new(),
            shipping: None,
        };
        self.apply_to(&mut product)?;
        Ok(product)
    }

    fn discount(&self, percentage: f64) -> Option<Discount> {
        let kind = self.discount_type.trim();
        if kind.is_empty() || kind == NO_DISCOUNT {
            return None;
        }
        Some(Discount {
            kind: kind.to_string(),
            percentage,
        })
    }

    fn parse(&self) -> Result<Parsed, DraftError> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut fail = |field: &str, message: &str| {
            errors
                .entry(field.to_string())
                .or_default()
                .push(message.to_string());
        };

        if self.name.trim().is_empty() {
            fail("name", "is required");
        }
        if self.sku.trim().is_empty() {
            fail("sku", "is required");
        }

        let base_price = match parse_amount(&self.base_price) {
            Ok(Some(price)) => price,
            Ok(None) => {
                fail("basePrice", "is required");
                0.0
            }
            Err(message) => {
                fail("basePrice", message);
                0.0
            }
        };

        let quantity = parse_quantity(&self.quantity).unwrap_or_else(|message| {
            fail("quantity", message);
            0
        });

        let discount_percentage = match parse_amount(&self.discount_percentage) {
            Ok(Some(p)) if p > 100.0 => {
                fail("discountPercentage", "must be between 0 and 100");
                0.0
            }
            Ok(p) => p.unwrap_or(0.0),
            Err(_) => {
                fail("discountPercentage", "must be between 0 and 100");
                0.0
            }
        };

        let vat_amount = parse_amount(&self.vat_amount).unwrap_or_else(|message| {
            fail("vatAmount", message);
            None
        });

        let mut dimension = |field: &str, raw: &str| {
            parse_amount(raw).unwrap_or_else(|message| {
                fail(field, message);
                None
            })
        };
        let shipping = Shipping {
            weight: dimension("weight", &self.shipping.weight),
            height: dimension("height", &self.shipping.height),
            length: dimension("length", &self.shipping.length),
            width: dimension("width", &self.shipping.width),
            is_physical_product: self.shipping.is_physical_product,
        };

        if !errors.is_empty() {
            tracing::warn!(fields = errors.len(), "product draft failed validation");
            return Err(DraftError::Invalid { errors });
        }

        Ok(Parsed {
            base_price,
            quantity,
            discount_percentage,
            vat_amount,
            shipping,
        })
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::blank()
    }
}

/// Parses an optional non-negative decimal. Blank input is `None`.
fn parse_amount(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if !value.is_finite() => Err("must be a number"),
        Ok(value) if value < 0.0 => Err("must not be negative"),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err("must be a number"),
    }
}

/// Parses a required stock count.
fn parse_quantity(raw: &str) -> Result<u32, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("is required");
    }
    let value = raw.parse::<i64>().map_err(|_| "must be a whole number")?;
    if value < 0 {
        return Err("must not be negative");
    }
    u32::try_from(value).map_err(|_| "is too large")
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::product;
    use crate::config::PageSize;
    use crate::model::CatalogDocument;
    use crate::navigation::RecordingNavigator;

    fn filled() -> ProductDraft {
        let mut draft = ProductDraft::blank();
        draft.name = "Desk Lamp".to_string();
        draft.sku = "LMP-1".to_string();
        draft.base_price = "39.99".to_string();
        draft.quantity = "12".to_string();
        draft.category_id = "2".to_string();
        draft.status_id = "1".to_string();
        draft
    }

    fn invalid_fields(result: Result<(), DraftError>) -> Vec<String> {
        match result {
            Err(DraftError::Invalid { errors }) => errors.into_keys().collect(),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_draft_defaults() {
        let draft = ProductDraft::blank();
        assert!(!draft.is_edit_mode());
        assert_eq!(draft.discount_type, "No Discount");
        assert_eq!(draft.tax_class, "Tax Free");
        assert_eq!(draft, ProductDraft::default());
    }

    #[test]
    fn test_blank_draft_reports_required_fields() {
        let fields = invalid_fields(ProductDraft::blank().validate());
        assert_eq!(fields, ["basePrice", "name", "quantity", "sku"]);
    }

    #[test]
    fn test_numeric_rules() {
        let mut draft = filled();
        draft.base_price = "-1".to_string();
        draft.quantity = "2.5".to_string();
        draft.discount_percentage = "101".to_string();
        draft.vat_amount = "abc".to_string();
        draft.shipping.weight = "-3".to_string();

        let error = draft.validate().unwrap_err();

        assert_eq!(error.field_errors("basePrice"), ["must not be negative"]);
        assert_eq!(error.field_errors("quantity"), ["must be a whole number"]);
        assert_eq!(
            error.field_errors("discountPercentage"),
            ["must be between 0 and 100"]
        );
        assert_eq!(error.field_errors("vatAmount"), ["must be a number"]);
        assert_eq!(error.field_errors("weight"), ["must not be negative"]);
    }

    #[test]
    fn test_negative_quantity_and_nan_price() {
        let mut draft = filled();
        draft.quantity = "-4".to_string();
        draft.base_price = "NaN".to_string();

        let error = draft.validate().unwrap_err();
        assert_eq!(error.field_errors("quantity"), ["must not be negative"]);
        assert_eq!(error.field_errors("basePrice"), ["must be a number"]);
    }

    #[test]
    fn test_discount_bounds_are_inclusive() {
        let mut draft = filled();
        draft.discount_type = "Percentage".to_string();
        for ok in ["0", "100", "12.5", ""] {
            draft.discount_percentage = ok.to_string();
            assert!(draft.validate().is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_from_product_round_trips_through_apply() {
        let mut original = product("7", "Speaker", "SPK-7", "2", 80.0);
        original.details.discount = Some(Discount {
            kind: "Percentage".to_string(),
            percentage: 15.0,
        });
        original.details.vat_amount = Some(5.0);
        original.shipping = Some(Shipping {
            weight: Some(1.5),
            is_physical_product: true,
            ..Shipping::default()
        });

        let draft = ProductDraft::from_product(&original);
        assert!(draft.is_edit_mode());
        assert_eq!(draft.product_id().map(ProductId::as_str), Some("7"));
        assert_eq!(draft.base_price, "80");
        assert_eq!(draft.discount_type, "Percentage");
        assert_eq!(draft.discount_percentage, "15");
        assert_eq!(draft.tax_class, "Tax Free");
        assert_eq!(draft.shipping.weight, "1.5");

        let mut copy = original.clone();
        draft.apply_to(&mut copy).unwrap();
        copy.details.tax_class = None;
        assert_eq!(copy, original);
    }

    #[test]
    fn test_from_product_without_discount_defaults() {
        let draft = ProductDraft::from_product(&product("1", "A", "A-1", "1", 5.0));
        assert_eq!(draft.discount_type, "No Discount");
        assert_eq!(draft.discount_percentage, "0");
        assert_eq!(draft.vat_amount, "0");
        assert!(draft.shipping.weight.is_empty());
    }

    #[test]
    fn test_apply_to_leaves_product_untouched_on_error() {
        let mut target = product("1", "Keep", "KEEP-1", "1", 5.0);
        let before = target.clone();
        let mut draft = ProductDraft::from_product(&target);
        draft.name = "  ".to_string();

        assert!(draft.apply_to(&mut target).is_err());
        assert_eq!(target, before);
    }

    #[test]
    fn test_into_product_builds_new_product() {
        let mut draft = filled();
        draft.description = " Warm light ".to_string();

        let created = draft.into_product(ProductId::new("new-1"), "2024-03-01").unwrap();

        assert_eq!(created.id.as_str(), "new-1");
        assert_eq!(created.name, "Desk Lamp");
        assert_eq!(created.details.added_date, "2024-03-01");
        assert_eq!(created.details.description.as_deref(), Some("Warm light"));
        assert_eq!(created.details.tax_class.as_deref(), Some("Tax Free"));
        assert!(created.details.discount.is_none());
        assert!(created.shipping.is_none());
        assert_eq!(created.quantity(), 12);
    }

    #[test]
    fn test_save_navigates_to_product_list() {
        let mut nav = RecordingNavigator::default();

        assert_eq!(filled().save(&mut nav), Ok(SaveOutcome::Created));

        let edit = ProductDraft::from_product(&product("3", "C", "C-3", "1", 1.0));
        assert_eq!(
            edit.save(&mut nav),
            Ok(SaveOutcome::Updated {
                id: ProductId::new("3")
            })
        );
        assert_eq!(nav.history(), ["/products", "/products"]);
    }

    #[test]
    fn test_save_with_errors_stays_on_form() {
        let mut nav = RecordingNavigator::default();
        assert!(ProductDraft::blank().save(&mut nav).is_err());
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_for_route() {
        let document = CatalogDocument {
            products: vec![product("1", "A", "A-1", "1", 5.0)],
            ..CatalogDocument::default()
        };
        let catalog = CatalogController::from_document(document, PageSize::default());

        assert!(!ProductDraft::for_route(&Route::CreateProduct, &catalog)
            .unwrap()
            .is_edit_mode());
        assert_eq!(
            ProductDraft::for_route(&Route::EditProduct(ProductId::new("1")), &catalog)
                .unwrap()
                .name,
            "A"
        );
        assert!(matches!(
            ProductDraft::for_route(&Route::EditProduct(ProductId::new("2")), &catalog),
            Err(DraftError::UnknownProduct { .. })
        ));
        assert_eq!(
            ProductDraft::for_route(&Route::Products, &catalog),
            Err(DraftError::NotAFormRoute {
                path: "/products".to_string()
            })
        );
    }
}

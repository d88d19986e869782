//! Filter state and the pure derivation of the visible product sequence.

use std::cmp::Ordering;

use crate::catalog::errors::CatalogError;
use crate::model::{Product, StatusId};

/// Direction of the price sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

/// Inclusive price bounds with `0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Creates validated price bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPriceRange`] if either bound is
    /// negative or not finite, or if `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, CatalogError> {
        let valid = min.is_finite() && max.is_finite() && min >= 0.0 && min <= max;
        if !valid {
            return Err(CatalogError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` when `price` lies within the bounds.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Everything that narrows or orders the product list.
///
/// # Example
///
/// ```rust
/// use catalog_admin::catalog::{FilterState, PriceRange, SortOrder};
///
/// let filter = FilterState::default()
///     .with_query("watch")
///     .with_price_range(PriceRange::new(50.0, 200.0).unwrap())
///     .with_sort(SortOrder::Descending);
///
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    query: String,
    status: Option<StatusId>,
    price: Option<PriceRange>,
    sort: Option<SortOrder>,
}

impl FilterState {
    /// Sets the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the active status.
    #[must_use]
    pub fn with_status(mut self, status: StatusId) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the price bounds.
    #[must_use]
    pub const fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// The free-text query; empty means no query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusId> {
        self.status.as_ref()
    }

    /// The price bounds, if any.
    #[must_use]
    pub const fn price_range(&self) -> Option<PriceRange> {
        self.price
    }

    /// The sort order, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Returns `true` when nothing filters or orders the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.status.is_none() && self.price.is_none() && self.sort.is_none()
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub(crate) fn set_status(&mut self, status: Option<StatusId>) {
        self.status = status;
    }

    pub(crate) fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price = range;
    }

    pub(crate) fn set_sort(&mut self, order: Option<SortOrder>) {
        self.sort = order;
    }
}

/// Derives the visible product sequence from the full list.
///
/// Steps, in order: query match on name or SKU (case-insensitive
/// substring), exact status match, inclusive price bounds, then a stable
/// sort by base price. The result depends only on the two arguments.
#[must_use]
pub fn derive_view<'a>(products: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    let needle = filter.query.to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.matches_query(&needle))
        .filter(|p| filter.status.as_ref().map_or(true, |s| p.status_id() == s))
        .filter(|p| filter.price.map_or(true, |r| r.contains(p.base_price())))
        .collect();

    if let Some(order) = filter.sort {
        view.sort_by(|a, b| {
            let ord: Ordering = a.base_price().total_cmp(&b.base_price());
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::product;

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Smart Watch", "WCH-100", "1", 120.0),
            product("2", "Phone Case", "sku-200", "2", 15.0),
            product("3", "Headphones", "SKU-300", "1", 220.0),
            product("4", "Laptop Stand", "STD-400", "3", 50.0),
            product("5", "Keyboard", "KBD-500", "1", 200.0),
        ]
    }

    fn ids(view: &[&Product]) -> Vec<String> {
        view.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_fixture_order() {
        let products = sample();
        let view = derive_view(&products, &FilterState::default());
        assert_eq!(ids(&view), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_query_matches_sku_case_insensitively() {
        let products = sample();
        let view = derive_view(&products, &FilterState::default().with_query("sku-"));
        assert_eq!(ids(&view), ["2", "3"]);
    }

    #[test]
    fn test_query_matches_name() {
        let products = sample();
        let view = derive_view(&products, &FilterState::default().with_query("WATCH"));
        assert_eq!(ids(&view), ["1"]);
    }

    #[test]
    fn test_status_filter() {
        let products = sample();
        let view = derive_view(
            &products,
            &FilterState::default().with_status(StatusId::new("1")),
        );
        assert_eq!(ids(&view), ["1", "3", "5"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = sample();
        let range = PriceRange::new(50.0, 200.0).unwrap();
        let view = derive_view(&products, &FilterState::default().with_price_range(range));

        let expected = products
            .iter()
            .filter(|p| (50.0..=200.0).contains(&p.base_price()))
            .count();
        assert_eq!(view.len(), expected);
        assert_eq!(ids(&view), ["1", "4", "5"]);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let products = sample();
        let asc = derive_view(&products, &FilterState::default().with_sort(SortOrder::Ascending));
        assert_eq!(ids(&asc), ["2", "4", "1", "5", "3"]);

        let desc = derive_view(&products, &FilterState::default().with_sort(SortOrder::Descending));
        assert_eq!(ids(&desc), ["3", "5", "1", "4", "2"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let products = vec![
            product("a", "A", "A", "1", 10.0),
            product("b", "B", "B", "1", 5.0),
            product("c", "C", "C", "1", 10.0),
        ];
        let view = derive_view(&products, &FilterState::default().with_sort(SortOrder::Descending));
        assert_eq!(ids(&view), ["a", "c", "b"]);
    }

    #[test]
    fn test_filters_combine() {
        let products = sample();
        let filter = FilterState::default()
            .with_status(StatusId::new("1"))
            .with_price_range(PriceRange::new(100.0, 250.0).unwrap())
            .with_sort(SortOrder::Ascending);
        let view = derive_view(&products, &filter);
        assert_eq!(ids(&view), ["1", "5", "3"]);
    }

    #[test]
    fn test_derive_view_is_deterministic() {
        let products = sample();
        let filter = FilterState::default()
            .with_query("e")
            .with_sort(SortOrder::Ascending);
        assert_eq!(
            ids(&derive_view(&products, &filter)),
            ids(&derive_view(&products, &filter))
        );
    }

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::new(0.0, 0.0).is_ok());
        assert!(matches!(
            PriceRange::new(200.0, 50.0),
            Err(CatalogError::InvalidPriceRange { .. })
        ));
        assert!(PriceRange::new(-1.0, 5.0).is_err());
        assert!(PriceRange::new(0.0, f64::INFINITY).is_err());
        assert!(PriceRange::new(f64::NAN, 1.0).is_err());
    }
}

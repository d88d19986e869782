//! The catalog view controller.
//!
//! This module provides [`CatalogController`], the single owner of the
//! product list. Every handler is a synchronous `&mut self` method; the
//! fixture load is the only suspending operation.

use crate::catalog::errors::{BulkAction, CatalogError};
use crate::catalog::export::{build_export, ExportArtifact};
use crate::catalog::filter::{derive_view, FilterState, PriceRange, SortOrder};
use crate::catalog::pagination::{PageWindow, Pagination};
use crate::catalog::selection::SelectionSet;
use crate::config::{CatalogConfig, PageSize, DEFAULT_EXPORT_FILE_NAME};
use crate::dialog::Dialog;
use crate::fixtures::{FixtureCache, FixtureClient};
use crate::model::{is_valid_price, CatalogDocument, Product, ProductId, ReferenceData, StatusId};
use crate::navigation::{Navigator, Route};

const CONFIRM_DELETE_ONE: &str = "Are you sure you want to delete this product?";
const CONFIRM_DELETE_SELECTED: &str = "Are you sure you want to delete the selected products?";
const PROMPT_SELECT_TO_DELETE: &str = "Please select products to delete.";
const PROMPT_SELECT_TO_EXPORT: &str = "Please select at least one product to export.";

/// Outcome of the most recent fixture load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// The fixture loaded and the list is populated.
    Ready,
    /// The last load failed. The list, lookups and selection are cleared.
    Failed {
        /// Human-readable cause, suitable for a retry banner.
        message: String,
    },
}

/// The product detail view.
///
/// `Closed -> Open` on a view request, `Open -> Closed` on close.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewModal {
    /// No product is being viewed.
    #[default]
    Closed,
    /// This product is being viewed.
    Open(Product),
}

/// Owns the product list and derives everything the list view shows.
///
/// The derived view is recomputed from `(products, filter)` on every read;
/// nothing is patched incrementally. After each mutation the page is
/// clamped into `1..=max(1, total_pages)` and the selection is trimmed to
/// loaded products.
#[derive(Debug, Clone)]
pub struct CatalogController {
    products: Vec<Product>,
    reference: ReferenceData,
    filter: FilterState,
    pagination: Pagination,
    selection: SelectionSet,
    modal: ViewModal,
    load_state: LoadState,
    cache: Option<FixtureCache<CatalogDocument>>,
    export_file_name: String,
}

impl CatalogController {
    /// Creates an empty controller that loads from the configured fixture.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            products: Vec::new(),
            reference: ReferenceData::default(),
            filter: FilterState::default(),
            pagination: Pagination::new(config.page_size()),
            selection: SelectionSet::default(),
            modal: ViewModal::Closed,
            load_state: LoadState::Idle,
            cache: Some(FixtureCache::new(config.products_fixture().clone())),
            export_file_name: config.export_file_name().to_string(),
        }
    }

    /// Creates a controller over an already parsed document.
    ///
    /// Such a controller has no fixture source, so [`load`](Self::load) and
    /// [`reload`](Self::reload) leave it untouched.
    #[must_use]
    pub fn from_document(document: CatalogDocument, page_size: PageSize) -> Self {
        let (products, reference) = document.into_parts();
        Self {
            products,
            reference,
            filter: FilterState::default(),
            pagination: Pagination::new(page_size),
            selection: SelectionSet::default(),
            modal: ViewModal::Closed,
            load_state: LoadState::Ready,
            cache: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Loads the products fixture, reusing the cached document when the
    /// view already loaded it.
    ///
    /// Failures are logged and recorded in [`LoadState::Failed`], and the
    /// view is emptied. They are never retried automatically.
    pub async fn load(&mut self, client: &FixtureClient) -> &LoadState {
        let Some(cache) = self.cache.as_mut() else {
            return &self.load_state;
        };

        match cache.get_or_load(client).await {
            Ok(document) => {
                self.products = document.products.clone();
                self.reference =
                    ReferenceData::new(document.categories.clone(), document.product_status.clone());
                self.load_state = LoadState::Ready;
                self.settle();
                tracing::debug!(products = self.products.len(), "catalog loaded");
            }
            Err(e) => {
                tracing::error!(error = %e, source = %cache.source(), "failed to load product fixture");
                self.load_state = LoadState::Failed {
                    message: e.to_string(),
                };
                self.products.clear();
                self.reference = ReferenceData::default();
                self.modal = ViewModal::Closed;
                self.settle();
            }
        }

        &self.load_state
    }

    /// Drops the cached fixture and loads it again. This is the explicit
    /// retry after a failed load.
    pub async fn reload(&mut self, client: &FixtureClient) -> &LoadState {
        if let Some(cache) = self.cache.as_mut() {
            cache.invalidate();
        }
        self.load(client).await
    }

    /// Outcome of the most recent load.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// The full product list in fixture order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category and status lookups.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Current filter state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns `true` when `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selection.contains(id)
    }

    /// Looks a product up in the full list.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The filtered and sorted product sequence.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Product> {
        derive_view(&self.products, &self.filter)
    }

    /// Number of products passing the filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Rows on the current page.
    #[must_use]
    pub fn current_page(&self) -> Vec<&Product> {
        let view = self.filtered();
        let range = self.pagination.range(view.len());
        view[range].to_vec()
    }

    /// Current page number, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.pagination.page()
    }

    /// Number of pages for the filtered list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered_count())
    }

    /// "Showing a - b of n" numbers.
    #[must_use]
    pub fn page_window(&self) -> PageWindow {
        self.pagination.window(self.filtered_count())
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Sets the free-text query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query.into());
        self.filter_changed();
    }

    /// Sets or clears the active status.
    pub fn set_status(&mut self, status: Option<StatusId>) {
        self.filter.set_status(status);
        self.filter_changed();
    }

    /// Status tab click: selecting the active status again clears it.
    pub fn toggle_status(&mut self, status: StatusId) {
        let next = if self.filter.status() == Some(&status) {
            None
        } else {
            Some(status)
        };
        self.set_status(next);
    }

    /// Sets or clears the price bounds.
    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.filter.set_price_range(range);
        self.filter_changed();
    }

    /// Sets or clears the price sort.
    pub fn set_sort_order(&mut self, order: Option<SortOrder>) {
        self.filter.set_sort(order);
        self.filter_changed();
    }

    /// Removes every filter and the sort.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.filter_changed();
    }

    fn filter_changed(&mut self) {
        self.pagination.reset();
        tracing::debug!(
            query = self.filter.query(),
            matches = self.filtered_count(),
            "filter changed"
        );
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Jumps to `page` if it exists. Returns `false` and stays put otherwise.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let count = self.filtered_count();
        self.pagination.go_to(page, count)
    }

    /// Moves one page forward if possible.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page() + 1)
    }

    /// Moves one page back if possible.
    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.page().saturating_sub(1))
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flips selection of one product. Returns `true` when it is now
    /// selected. Identifiers of unloaded products are ignored.
    pub fn toggle_one(&mut self, id: &ProductId) -> bool {
        if self.product(id).is_none() {
            tracing::warn!(id = %id, "ignoring selection of unknown product");
            return false;
        }
        self.selection.toggle(id)
    }

    /// Selects every row on the current page, or deselects them all when
    /// they are already selected. Rows on other pages are untouched.
    pub fn toggle_all_on_page(&mut self) {
        let page_ids: Vec<ProductId> = self.current_page().iter().map(|p| p.id.clone()).collect();
        if page_ids.is_empty() {
            return;
        }

        if self.selection.contains_all(page_ids.iter()) {
            self.selection.remove_all(page_ids.iter());
        } else {
            self.selection.insert_all(page_ids.iter());
        }
    }

    /// Returns `true` when the current page is non-empty and fully selected.
    #[must_use]
    pub fn is_page_selected(&self) -> bool {
        let page = self.current_page();
        !page.is_empty() && self.selection.contains_all(page.iter().map(|p| &p.id))
    }

    // ------------------------------------------------------------------
    // Bulk and single actions
    // ------------------------------------------------------------------

    /// Deletes every selected product after confirmation.
    ///
    /// Returns the number of removed products; zero when the user declines.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptySelection`] after prompting the user if
    /// nothing is selected. Nothing changes in that case.
    pub fn delete_selected(&mut self, dialog: &mut impl Dialog) -> Result<usize, CatalogError> {
        if self.selection.is_empty() {
            dialog.alert(PROMPT_SELECT_TO_DELETE);
            return Err(CatalogError::EmptySelection {
                action: BulkAction::Delete,
            });
        }

        if !dialog.confirm(CONFIRM_DELETE_SELECTED) {
            return Ok(0);
        }

        let before = self.products.len();
        let selection = &self.selection;
        self.products.retain(|p| !selection.contains(&p.id));
        let removed = before - self.products.len();

        self.selection.clear();
        self.settle();
        tracing::info!(removed, remaining = self.products.len(), "deleted selected products");
        Ok(removed)
    }

    /// Deletes one product after confirmation. Returns `false` when the
    /// user declines.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown identifier, without
    /// asking for confirmation.
    pub fn delete_product(
        &mut self,
        id: &ProductId,
        dialog: &mut impl Dialog,
    ) -> Result<bool, CatalogError> {
        if self.product(id).is_none() {
            return Err(CatalogError::NotFound { id: id.clone() });
        }

        if !dialog.confirm(CONFIRM_DELETE_ONE) {
            return Ok(false);
        }

        self.products.retain(|p| &p.id != id);
        self.settle();
        tracing::info!(id = %id, "deleted product");
        Ok(true)
    }

    /// Exports the selected products that pass the current filter, in view
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptySelection`] after prompting the user if
    /// nothing is selected; no artifact is produced.
    pub fn export(&self, dialog: &mut impl Dialog) -> Result<ExportArtifact, CatalogError> {
        if self.selection.is_empty() {
            dialog.alert(PROMPT_SELECT_TO_EXPORT);
            return Err(CatalogError::EmptySelection {
                action: BulkAction::Export,
            });
        }

        let rows: Vec<&Product> = self
            .filtered()
            .into_iter()
            .filter(|p| self.selection.contains(&p.id))
            .collect();

        let artifact = build_export(&rows, &self.reference, &self.export_file_name)?;
        tracing::info!(rows = artifact.rows(), file = artifact.file_name(), "exported products");
        Ok(artifact)
    }

    /// Inserts a product, or replaces the product with the same identifier.
    /// Returns `true` when it was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPrice`] for a negative or non-finite
    /// base price; the list is unchanged.
    pub fn upsert_product(&mut self, product: Product) -> Result<bool, CatalogError> {
        if !is_valid_price(product.base_price()) {
            tracing::warn!(id = %product.id, price = product.base_price(), "rejecting product with invalid price");
            return Err(CatalogError::InvalidPrice {
                id: product.id,
                price: product.details.base_price,
            });
        }

        let inserted = match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                false
            }
            None => {
                self.products.push(product);
                true
            }
        };
        self.settle();
        Ok(inserted)
    }

    // ------------------------------------------------------------------
    // Detail view
    // ------------------------------------------------------------------

    /// Opens the detail view for a product from the full list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ViewAlreadyOpen`] if a product is already
    /// being viewed, or [`CatalogError::NotFound`] for an unknown identifier.
    pub fn view_product(&mut self, id: &ProductId) -> Result<&Product, CatalogError> {
        if matches!(self.modal, ViewModal::Open(_)) {
            return Err(CatalogError::ViewAlreadyOpen);
        }

        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.clone() })?;

        let product = &self.products[index];
        self.modal = ViewModal::Open(product.clone());
        Ok(product)
    }

    /// Closes the detail view.
    pub fn close_view(&mut self) {
        self.modal = ViewModal::Closed;
    }

    /// The detail view state.
    #[must_use]
    pub const fn modal(&self) -> &ViewModal {
        &self.modal
    }

    /// The product in the detail view, if open.
    #[must_use]
    pub const fn viewed_product(&self) -> Option<&Product> {
        match &self.modal {
            ViewModal::Open(product) => Some(product),
            ViewModal::Closed => None,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Opens the add-product form.
    pub fn add_product(&self, nav: &mut impl Navigator) {
        nav.go(&Route::CreateProduct);
    }

    /// Opens the edit form for a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown identifier.
    pub fn edit_product(&self, id: &ProductId, nav: &mut impl Navigator) -> Result<(), CatalogError> {
        if self.product(id).is_none() {
            return Err(CatalogError::NotFound { id: id.clone() });
        }
        nav.go(&Route::EditProduct(id.clone()));
        Ok(())
    }

    /// Re-establishes the invariants after the product list changed.
    fn settle(&mut self) {
        self.selection.retain_loaded(&self.products);
        let count = self.filtered_count();
        self.pagination.clamp(count);
    }
}

//! Integration tests for the product list controller.
//!
//! These tests load the products fixture from disk and drive the
//! controller through the public API the way a list view would.

mod common;

use catalog_admin::catalog::{
    BulkAction, CatalogController, CatalogError, LoadState, PageWindow, PriceRange, SortOrder,
    ViewModal,
};
use catalog_admin::dialog::ScriptedDialog;
use catalog_admin::model::{ProductId, StatusId, StatusTone};
use catalog_admin::navigation::RecordingNavigator;
use catalog_admin::{CatalogConfig, FixtureClient, FixtureSource, PageSize};
use tempfile::TempDir;

/// Writes the products fixture into a temp dir and loads a controller from it.
async fn loaded_controller(page_size: usize) -> (CatalogController, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, common::products_fixture().to_string()).unwrap();

    let config = CatalogConfig::builder()
        .products_fixture(FixtureSource::from_path(&path))
        .page_size(PageSize::new(page_size).unwrap())
        .build()
        .unwrap();
    let client = FixtureClient::from_config(&config).unwrap();

    let mut catalog = CatalogController::new(&config);
    assert_eq!(catalog.load_state(), &LoadState::Idle);
    assert_eq!(catalog.load(&client).await, &LoadState::Ready);

    (catalog, dir)
}

fn ids(catalog: &CatalogController) -> Vec<String> {
    catalog
        .current_page()
        .iter()
        .map(|p| p.id.to_string())
        .collect()
}

fn id(raw: &str) -> ProductId {
    ProductId::new(raw)
}

// ============================================================================
// Loading and display
// ============================================================================

#[tokio::test]
async fn test_load_from_file_populates_list_and_lookups() {
    let (catalog, _dir) = loaded_controller(3).await;

    assert_eq!(catalog.products().len(), 5);
    assert_eq!(catalog.total_pages(), 2);
    assert_eq!(ids(&catalog), ["p-1", "p-2", "p-3"]);

    let watch = catalog.product(&id("p-1")).unwrap();
    let reference = catalog.reference();
    assert_eq!(reference.category_name(&watch.category_id), "Watch");
    assert_eq!(reference.status_name(watch.status_id()), "Published");
    assert_eq!(reference.status_tone(watch.status_id()), StatusTone::Success);
    assert_eq!(watch.display_price(), "$120.00");
    assert_eq!(watch.display_added_date(), "15 Jan 2024");
    assert_eq!(watch.variant_label(), "1 Variant");
    assert_eq!(watch.thumbnail(), Some("/images/p-1.png"));
}

// ============================================================================
// Filtering, sorting and paging
// ============================================================================

#[tokio::test]
async fn test_price_range_keeps_only_in_range_products() {
    let (mut catalog, _dir) = loaded_controller(10).await;

    catalog.set_price_range(Some(PriceRange::new(50.0, 200.0).unwrap()));

    let prices: Vec<f64> = catalog.filtered().iter().map(|p| p.base_price()).collect();
    assert_eq!(prices, [120.0, 50.0, 200.0]);
}

#[tokio::test]
async fn test_search_matches_sku_case_insensitively() {
    let (mut catalog, _dir) = loaded_controller(10).await;

    catalog.set_search_query("sku-");

    assert_eq!(ids(&catalog), ["p-2", "p-3"]);
}

#[tokio::test]
async fn test_status_sort_and_page_window() {
    let (mut catalog, _dir) = loaded_controller(2).await;

    catalog.toggle_status(StatusId::new("1"));
    catalog.set_sort_order(Some(SortOrder::Descending));

    assert_eq!(catalog.filtered_count(), 3);
    assert_eq!(ids(&catalog), ["p-3", "p-5"]);
    assert!(catalog.next_page());
    assert_eq!(ids(&catalog), ["p-1"]);
    assert_eq!(
        catalog.page_window(),
        PageWindow {
            first: 3,
            last: 3,
            total: 3
        }
    );

    catalog.set_search_query("head");
    assert_eq!(catalog.page(), 1);
    assert_eq!(ids(&catalog), ["p-3"]);
}

#[tokio::test]
async fn test_page_stays_in_bounds_after_every_filter_change() {
    let (mut catalog, _dir) = loaded_controller(2).await;

    let queries = ["", "a", "zzz", "sku", "STAND"];
    let ranges = [None, Some((0.0, 20.0)), Some((100.0, 1000.0))];
    for query in queries {
        for range in ranges {
            catalog.go_to_page(catalog.total_pages());
            catalog.set_search_query(query);
            catalog.set_price_range(range.map(|(min, max)| PriceRange::new(min, max).unwrap()));

            let total = catalog.total_pages();
            assert!(catalog.page() >= 1);
            assert!(catalog.page() <= total.max(1), "query {query:?} range {range:?}");
        }
    }
}

#[test]
fn test_invalid_price_range_is_rejected() {
    let result = PriceRange::new(200.0, 50.0);
    assert!(matches!(result, Err(CatalogError::InvalidPriceRange { .. })));
}

// ============================================================================
// Selection and bulk actions
// ============================================================================

#[tokio::test]
async fn test_toggle_all_on_page_twice_is_a_no_op() {
    let (mut catalog, _dir) = loaded_controller(3).await;
    catalog.toggle_one(&id("p-5"));
    let before = catalog.selection().clone();

    catalog.toggle_all_on_page();
    catalog.toggle_all_on_page();
    catalog.toggle_all_on_page();
    catalog.toggle_all_on_page();

    assert_eq!(catalog.selection(), &before);
}

#[tokio::test]
async fn test_bulk_delete_two_of_three_on_page() {
    let (mut catalog, _dir) = loaded_controller(3).await;
    catalog.toggle_one(&id("p-1"));
    catalog.toggle_one(&id("p-2"));
    let mut dialog = ScriptedDialog::accepting();

    let removed = catalog.delete_selected(&mut dialog).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(catalog.products().len(), 3);
    assert!(catalog.selection().is_empty());
    assert_eq!(dialog.confirmations().len(), 1);
    assert_eq!(ids(&catalog), ["p-3", "p-4", "p-5"]);
    assert_eq!(catalog.total_pages(), 1);
}

#[tokio::test]
async fn test_export_with_empty_selection_prompts_and_produces_nothing() {
    let (catalog, _dir) = loaded_controller(3).await;
    let mut dialog = ScriptedDialog::accepting();

    let result = catalog.export(&mut dialog);

    assert_eq!(
        result,
        Err(CatalogError::EmptySelection {
            action: BulkAction::Export
        })
    );
    assert_eq!(
        dialog.alerts(),
        ["Please select at least one product to export."]
    );
}

#[tokio::test]
async fn test_export_writes_csv_file() {
    let (mut catalog, dir) = loaded_controller(3).await;
    catalog.toggle_one(&id("p-2"));
    catalog.toggle_one(&id("p-4"));

    let artifact = catalog.export(&mut ScriptedDialog::accepting()).unwrap();
    let path = artifact.write_to(dir.path()).await.unwrap();

    let saved = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        saved,
        "Product,SKU,Category,Stock,Price,Status,Added\n\
         Phone Case,sku-200,Accessories,10,15.00,Draft,2024-02-01\n\
         Laptop Stand,STD-400,Electronics,10,50.00,Low Stock,2024-03-05\n"
    );
}

#[tokio::test]
async fn test_selection_never_outlives_deleted_products() {
    let (mut catalog, _dir) = loaded_controller(2).await;
    let mut dialog = ScriptedDialog::accepting();

    catalog.toggle_all_on_page();
    catalog.delete_product(&id("p-1"), &mut dialog).unwrap();
    catalog.next_page();
    catalog.toggle_all_on_page();
    catalog.delete_selected(&mut dialog).unwrap();

    for selected in catalog.selection().iter() {
        assert!(catalog.product(selected).is_some());
    }
    assert!(catalog.page() <= catalog.total_pages().max(1));
}

// ============================================================================
// Detail view and navigation
// ============================================================================

#[tokio::test]
async fn test_view_then_edit() {
    let (mut catalog, _dir) = loaded_controller(3).await;
    let mut nav = RecordingNavigator::default();

    let viewed = catalog.view_product(&id("p-4")).unwrap().name.clone();
    assert_eq!(viewed, "Laptop Stand");
    assert!(matches!(catalog.modal(), ViewModal::Open(_)));
    catalog.close_view();

    catalog.edit_product(&id("p-4"), &mut nav).unwrap();
    catalog.add_product(&mut nav);

    assert_eq!(nav.history(), ["/product/edit?id=p-4", "/product/edit"]);
}

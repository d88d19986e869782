//! CSV export of selected products.
//!
//! The export has a fixed header row followed by one row per product:
//!
//! ```text
//! Product,SKU,Category,Stock,Price,Status,Added
//! Smart Watch,WCH-100,Watch,40,120.00,Published,2024-01-15
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::errors::CatalogError;
use crate::model::{Product, ReferenceData};

/// Header row of every export.
pub const EXPORT_HEADER: [&str; 7] = ["Product", "SKU", "Category", "Stock", "Price", "Status", "Added"];

/// MIME type of the export.
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// A finished export, ready to be handed to the user as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    file_name: String,
    content: String,
    rows: usize,
}

impl ExportArtifact {
    /// Suggested download file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// CSV text, header included.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of product rows, header excluded.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// MIME type for the download.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        EXPORT_MIME_TYPE
    }

    /// Writes the export into `dir` under its file name and returns the
    /// full path.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub async fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        tokio::fs::write(&path, self.content.as_bytes()).await?;
        Ok(path)
    }
}

/// Builds the CSV for `products`, resolving category and status names
/// through `reference`. Unknown references export as empty cells.
///
/// # Errors
///
/// Returns [`CatalogError::Export`] if the CSV writer fails.
pub fn build_export(
    products: &[&Product],
    reference: &ReferenceData,
    file_name: &str,
) -> Result<ExportArtifact, CatalogError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(EXPORT_HEADER)?;

    for product in products {
        let category = reference.category_name(&product.category_id);
        let status = reference.status_name(product.status_id());
        if category.is_empty() || status.is_empty() {
            tracing::warn!(
                product = %product.id,
                "exporting product with unresolved category or status"
            );
        }

        let stock = product.quantity().to_string();
        let price = product.price_text();
        wtr.write_record([
            product.name.as_str(),
            product.sku(),
            category,
            stock.as_str(),
            price.as_str(),
            status,
            product.details.added_date.as_str(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| CatalogError::Export {
        reason: e.to_string(),
    })?;
    let content = String::from_utf8(bytes).map_err(|e| CatalogError::Export {
        reason: e.to_string(),
    })?;

    Ok(ExportArtifact {
        file_name: file_name.to_string(),
        content,
        rows: products.len(),
    })
}

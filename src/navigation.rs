//! Navigation destinations and the navigate-by-path capability.
//!
//! The catalog never routes by itself; it builds a [`Route`] and hands its
//! path to a [`Navigator`] supplied by the hosting shell.
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::navigation::{Route, Navigator, RecordingNavigator};
//! use catalog_admin::model::ProductId;
//!
//! let route = Route::EditProduct(ProductId::new("p 1"));
//! assert_eq!(route.path(), "/product/edit?id=p%201");
//! assert_eq!(Route::parse(&route.path()), Some(route.clone()));
//!
//! let mut nav = RecordingNavigator::default();
//! nav.navigate(&route.path());
//! assert_eq!(nav.last(), Some("/product/edit?id=p%201"));
//! ```

use std::fmt;

use crate::model::ProductId;

/// Path of the product edit form.
const EDIT_PATH: &str = "/product/edit";

/// A logical destination in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The metrics dashboard (`/`).
    Dashboard,
    /// The product list (`/products`).
    Products,
    /// The add-product form (`/product/edit`).
    CreateProduct,
    /// The edit form for one product (`/product/edit?id=...`).
    EditProduct(ProductId),
}

impl Route {
    /// Returns the path for this destination. Product identifiers are
    /// percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Products => "/products".to_string(),
            Self::CreateProduct => EDIT_PATH.to_string(),
            Self::EditProduct(id) => {
                format!("{EDIT_PATH}?id={}", urlencoding::encode(id.as_str()))
            }
        }
    }

    /// Parses a path back into a destination.
    ///
    /// An edit path with an empty `id` is the create form, as the form
    /// switches into edit mode only when an identifier is present.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let (base, query) = path.split_once('?').unwrap_or((path, ""));
        match base {
            "/" | "" => Some(Self::Dashboard),
            "/products" => Some(Self::Products),
            EDIT_PATH => {
                let id = query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("id="))
                    .filter(|raw| !raw.is_empty());
                match id {
                    Some(raw) => {
                        let decoded = urlencoding::decode(raw).ok()?;
                        Some(Self::EditProduct(ProductId::new(decoded.into_owned())))
                    }
                    None => Some(Self::CreateProduct),
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The opaque navigate-by-path capability of the hosting shell.
pub trait Navigator {
    /// Moves the shell to `path`.
    fn navigate(&mut self, path: &str);

    /// Convenience wrapper navigating to a [`Route`].
    fn go(&mut self, route: &Route) {
        self.navigate(&route.path());
    }
}

/// A [`Navigator`] that only records the visited paths.
///
/// Useful for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    history: Vec<String>,
}

impl RecordingNavigator {
    /// Every path navigated to, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent path.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        tracing::debug!(path, "navigate");
        self.history.push(path.to_string());
    }
}

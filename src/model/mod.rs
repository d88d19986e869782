//! Data model for the catalog fixtures.
//!
//! - [`Product`] with its nested [`ProductDetails`], [`Variation`]s, [`Discount`] and [`Shipping`]
//! - [`Category`], [`Status`] and the [`ReferenceData`] lookups
//! - [`CatalogDocument`] and [`MenuDocument`], the two fixture shapes
//! - [`ProductId`], [`CategoryId`], [`StatusId`] identifier newtypes

mod fixture;
mod ids;
mod menu;
mod product;
mod reference;

pub use fixture::{CatalogDocument, MenuDocument};
pub use ids::{CategoryId, ProductId, StatusId};
pub use menu::{MenuItem, SubmenuItem};
pub use product::{Discount, Product, ProductDetails, Shipping, Variation};
pub(crate) use product::is_valid_price;
pub use reference::{Category, ReferenceData, Status, StatusTone};

//! Read-only reference data: categories and product statuses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, StatusId};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A product status such as "Published" or "Low Stock".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Published.
    Success,
    /// Draft.
    Neutral,
    /// Low Stock.
    Warning,
    /// Out of Stock.
    Danger,
    /// Any other status name.
    Unknown,
}

impl Status {
    /// Maps the well-known status names onto a badge tone.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match self.name.as_str() {
            "Published" => StatusTone::Success,
            "Draft" => StatusTone::Neutral,
            "Low Stock" => StatusTone::Warning,
            "Out of Stock" => StatusTone::Danger,
            _ => StatusTone::Unknown,
        }
    }
}

/// Category and status lookups loaded alongside the products.
///
/// Lookups never fail: an identifier without an entry resolves to an empty
/// display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    categories: BTreeMap<CategoryId, Category>,
    statuses: BTreeMap<StatusId, Status>,
}

impl ReferenceData {
    /// Creates reference data from the two lookups.
    #[must_use]
    pub const fn new(
        categories: BTreeMap<CategoryId, Category>,
        statuses: BTreeMap<StatusId, Status>,
    ) -> Self {
        Self {
            categories,
            statuses,
        }
    }

    /// Looks up a category.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Looks up a status.
    #[must_use]
    pub fn status(&self, id: &StatusId) -> Option<&Status> {
        self.statuses.get(id)
    }

    /// Display name of a category, or `""` when unknown.
    #[must_use]
    pub fn category_name(&self, id: &CategoryId) -> &str {
        self.category(id).map_or("", |c| c.name.as_str())
    }

    /// Display name of a status, or `""` when unknown.
    #[must_use]
    pub fn status_name(&self, id: &StatusId) -> &str {
        self.status(id).map_or("", |s| s.name.as_str())
    }

    /// Badge tone of a status; unknown identifiers get [`StatusTone::Unknown`].
    #[must_use]
    pub fn status_tone(&self, id: &StatusId) -> StatusTone {
        self.status(id).map_or(StatusTone::Unknown, Status::tone)
    }

    /// All categories, ordered by identifier.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// All statuses, ordered by identifier. Drives the status filter tabs.
    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.statuses.values()
    }
}

//! Sidebar menu entries.

use serde::{Deserialize, Serialize};

/// A second-level sidebar entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmenuItem {
    pub title: String,
    pub path: String,
}

/// A top-level sidebar entry. Entries with a submenu act as expandable
/// groups; the rest navigate directly to `path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SubmenuItem>,
}

impl MenuItem {
    /// Returns `true` when the entry expands into a submenu.
    #[must_use]
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// Returns `true` when one of the submenu entries points at `path`.
    #[must_use]
    pub fn submenu_contains(&self, path: &str) -> bool {
        self.submenu.iter().any(|sub| sub.path == path)
    }

    /// Navigation target of a top-level entry; entries without a path go home.
    #[must_use]
    pub fn target(&self) -> &str {
        self.path.as_deref().unwrap_or("/")
    }
}

//! Sidebar menu state.

use crate::config::FixtureSource;
use crate::fixtures::{FixtureClient, FixtureError};
use crate::model::{MenuDocument, MenuItem};
use crate::navigation::Navigator;
use crate::ui_state::store::KeyValueStore;

/// Store key holding the index of the open submenu.
pub const OPEN_SUBMENU_KEY: &str = "openSubmenuIndex";

/// Which sidebar submenu is expanded, persisted across views.
///
/// At most one submenu is open at a time. The open index is written to the
/// store whenever it changes and removed when every submenu closes.
#[derive(Debug, Clone)]
pub struct SidebarState<S> {
    items: Vec<MenuItem>,
    open: Option<usize>,
    store: S,
}

impl<S: KeyValueStore> SidebarState<S> {
    /// Creates the state with every submenu closed.
    pub const fn new(items: Vec<MenuItem>, store: S) -> Self {
        Self {
            items,
            open: None,
            store,
        }
    }

    /// Loads the menu fixture from `source`.
    ///
    /// # Errors
    ///
    /// Returns the [`FixtureError`] of the fetch.
    pub async fn load(
        client: &FixtureClient,
        source: &FixtureSource,
        store: S,
    ) -> Result<Self, FixtureError> {
        let items: MenuDocument = client.fetch(source).await?;
        tracing::debug!(items = items.len(), "sidebar menu loaded");
        Ok(Self::new(items, store))
    }

    /// Menu entries in display order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Index of the open submenu.
    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Returns `true` when the submenu at `index` is open.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Aligns the open submenu with the current location.
    ///
    /// A submenu containing `path` opens and is persisted. Otherwise a valid
    /// persisted index is restored; an invalid one is discarded.
    pub fn sync_with_path(&mut self, path: &str) {
        if let Some(index) = self.items.iter().position(|item| item.submenu_contains(path)) {
            self.open_and_persist(index);
            return;
        }

        let Some(saved) = self.store.get(OPEN_SUBMENU_KEY) else {
            return;
        };

        match saved.parse::<usize>() {
            Ok(index) if self.is_submenu(index) => self.open = Some(index),
            _ => {
                tracing::warn!(value = %saved, "discarding invalid saved submenu index");
                self.store.remove(OPEN_SUBMENU_KEY);
            }
        }
    }

    /// Opens the submenu at `index`, or closes it if it is already open.
    ///
    /// Returns `true` when it is now open. Entries without a submenu are
    /// ignored.
    pub fn toggle_submenu(&mut self, index: usize) -> bool {
        if !self.is_submenu(index) {
            tracing::warn!(index, "ignoring toggle of entry without submenu");
            return false;
        }

        if self.open == Some(index) {
            self.close_all();
            false
        } else {
            self.open_and_persist(index);
            true
        }
    }

    /// Navigates to `path`. Top-level navigation also closes every submenu
    /// and clears the persisted index; submenu navigation keeps it.
    pub fn navigate_to(&mut self, path: &str, is_submenu: bool, nav: &mut impl Navigator) {
        nav.navigate(path);
        if !is_submenu {
            self.close_all();
        }
    }

    /// Handles a click on the top-level entry at `index`: entries with a
    /// submenu toggle it, the rest navigate to their target.
    pub fn activate(&mut self, index: usize, nav: &mut impl Navigator) {
        let Some(item) = self.items.get(index) else {
            return;
        };

        if item.has_submenu() {
            self.toggle_submenu(index);
        } else {
            let target = item.target().to_string();
            self.navigate_to(&target, false, nav);
        }
    }

    /// Returns `true` when the entry at `index`, or one of its submenu
    /// entries, points at `path`.
    #[must_use]
    pub fn is_active(&self, index: usize, path: &str) -> bool {
        self.items.get(index).is_some_and(|item| {
            item.path.as_deref() == Some(path) || item.submenu_contains(path)
        })
    }

    fn is_submenu(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(MenuItem::has_submenu)
    }

    fn open_and_persist(&mut self, index: usize) {
        self.open = Some(index);
        self.store.set(OPEN_SUBMENU_KEY, index.to_string());
    }

    fn close_all(&mut self) {
        self.open = None;
        self.store.remove(OPEN_SUBMENU_KEY);
    }
}

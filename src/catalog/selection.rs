//! The set of checked product rows.

use std::collections::BTreeSet;

use crate::model::{Product, ProductId};

/// Identifiers of the checked products, kept in identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ProductId>,
}

impl SelectionSet {
    /// Flips membership of `id`. Returns `true` when it is now selected.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Returns `true` when `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Returns `true` when every id in `ids` is selected. Vacuously `true`
    /// for no ids.
    pub fn contains_all<'a>(&self, mut ids: impl Iterator<Item = &'a ProductId>) -> bool {
        ids.all(|id| self.ids.contains(id))
    }

    pub(crate) fn insert_all<'a>(&mut self, ids: impl Iterator<Item = &'a ProductId>) {
        self.ids.extend(ids.cloned());
    }

    pub(crate) fn remove_all<'a>(&mut self, ids: impl Iterator<Item = &'a ProductId>) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    /// Drops identifiers that no longer name a loaded product.
    pub(crate) fn retain_loaded(&mut self, products: &[Product]) {
        let loaded: BTreeSet<&ProductId> = products.iter().map(|p| &p.id).collect();
        self.ids.retain(|id| loaded.contains(id));
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::product;

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = SelectionSet::default();
        let id = ProductId::new("1");
        assert!(selection.toggle(&id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_contains_all() {
        let mut selection = SelectionSet::default();
        let ids = [ProductId::new("1"), ProductId::new("2")];
        assert!(selection.contains_all(std::iter::empty()));
        selection.insert_all(ids.iter());
        assert!(selection.contains_all(ids.iter()));
        selection.remove_all(ids[..1].iter());
        assert!(!selection.contains_all(ids.iter()));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_retain_loaded_drops_unknown_ids() {
        let products = vec![product("1", "A", "A", "1", 1.0)];
        let mut selection = SelectionSet::default();
        selection.toggle(&ProductId::new("1"));
        selection.toggle(&ProductId::new("gone"));

        selection.retain_loaded(&products);

        let remaining: Vec<_> = selection.iter().map(ProductId::as_str).collect();
        assert_eq!(remaining, ["1"]);
    }
}

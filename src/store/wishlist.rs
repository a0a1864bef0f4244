use indexmap::IndexSet;

use crate::models::ProductId;

/// Favorited product ids. Iterates in insertion order; equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: IndexSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `product_id` and returns whether it is now wishlisted.
    /// Ids are not checked against the catalog.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.ids.shift_remove(&product_id) {
            false
        } else {
            self.ids.insert(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<ProductId> for Wishlist {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

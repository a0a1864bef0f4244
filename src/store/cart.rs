use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CartLine, LineKey, Product, ProductId, Size};

/// Result of a quantity change, for logging and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuantityChange {
    Updated,
    Removed,
    Missing,
}

/// Shopping cart lines in insertion order. At most one line per [`LineKey`],
/// and every line holds a quantity of at least one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `product` in `size`/`color`, snapshotting the product on first add.
    /// Returns the resulting quantity of that line, which saturates at `u32::MAX`.
    pub fn add(&mut self, product: &Product, size: Size, color: &str) -> u32 {
        let key = LineKey::new(product.id, size, color);
        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(&key)) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            product: product.clone(),
            size,
            color: color.to_string(),
            quantity: 1,
        });
        1
    }

    /// Sets the quantity of the first line for `product_id`.
    ///
    /// When a product sits in the cart in several size/color variants only the
    /// first line is touched; use [`Cart::update_line_quantity`] to address a
    /// specific variant.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> QuantityChange {
        match self.first_key_for(product_id) {
            Some(key) => self.update_line_quantity(&key, quantity),
            None => QuantityChange::Missing,
        }
    }

    pub fn update_line_quantity(&mut self, key: &LineKey, quantity: u32) -> QuantityChange {
        if quantity < 1 {
            return if self.remove(key) {
                QuantityChange::Removed
            } else {
                QuantityChange::Missing
            };
        }
        match self.lines.iter_mut().find(|l| l.matches(key)) {
            Some(line) => {
                line.quantity = quantity;
                QuantityChange::Updated
            }
            None => QuantityChange::Missing,
        }
    }

    /// Removes the line matching `key` exactly. Returns whether a line was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| !l.matches(key));
        self.lines.len() != before
    }

    /// Removes the first line for `product_id`, whatever its size and color.
    pub fn remove_product(&mut self, product_id: ProductId) -> Option<LineKey> {
        let key = self.first_key_for(product_id)?;
        self.remove(&key);
        Some(key)
    }

    pub fn first_key_for(&self, product_id: ProductId) -> Option<LineKey> {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map(CartLine::key)
    }

    /// Sum of snapshotted price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{CartLine, LineKey, ProductId, Size};
use crate::store::{Cart, QuantityChange};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub size: Size,
    pub color: String,
}

/// New quantity for a cart line. Values below one remove the line.
/// Size and color pin the exact variant; without them the first line for the product is used.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
    pub size: Option<Size>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LineQuery {
    pub size: Option<Size>,
    pub color: Option<String>,
}

impl LineQuery {
    /// Full line key when both variant fields are present.
    pub fn key_for(&self, product_id: ProductId) -> Option<LineKey> {
        match (self.size, self.color.as_deref()) {
            (Some(size), Some(color)) => Some(LineKey::new(product_id, size, color)),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub subtotal: f64,
    pub item_count: u64,
    pub line_count: usize,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            subtotal: cart.subtotal(),
            item_count: cart.item_count(),
            line_count: cart.line_count(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartMutation {
    pub change: QuantityChange,
    pub cart: CartSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_key_needs_size_and_color() {
        let query = LineQuery {
            size: Some(Size::M),
            color: None,
        };
        assert_eq!(query.key_for(3), None);

        let query = LineQuery {
            size: Some(Size::M),
            color: Some("red".into()),
        };
        assert_eq!(query.key_for(3), Some(LineKey::new(3, Size::M, "red")));
    }
}

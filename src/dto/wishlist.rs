use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Product, ProductId};

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistView {
    /// Wishlisted ids in the order they were added, including ids not in the catalog.
    pub ids: Vec<ProductId>,
    /// Catalog products on the wishlist, in catalog order.
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistToggle {
    pub product_id: ProductId,
    pub wishlisted: bool,
    pub count: usize,
}

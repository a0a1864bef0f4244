use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Modal, Product, ProductId};

#[derive(Debug, Deserialize, ToSchema)]
pub struct OpenModalRequest {
    pub modal: Modal,
    /// Required for product modals unless a product is already in focus.
    pub product_id: Option<ProductId>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionView {
    pub modal: Modal,
    pub product_id: Option<ProductId>,
    /// The focused product as it currently stands in the catalog.
    pub product: Option<Product>,
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Product;

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

/// A product as shown in the detail view.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub discount_percent: Option<u32>,
    pub wishlisted: bool,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text term matched against name, category and description.
    #[serde(default)]
    pub q: String,
}

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::SortMode;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSortRequest {
    pub sort: SortMode,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetMaxPriceRequest {
    pub max: f64,
}

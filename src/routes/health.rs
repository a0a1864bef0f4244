use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Liveness plus a glance at the loaded storefront.
#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub products: usize,
    pub cart_lines: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Storefront is serving", body = ApiResponse<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let store = state.lock().await;
    let data = HealthData {
        status: "ok".to_string(),
        products: store.catalog().len(),
        cart_lines: store.cart().line_count(),
    };

    Json(ApiResponse::success("Storefront up", data, Some(Meta::empty())))
}

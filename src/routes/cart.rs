use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartMutation, CartSummary, LineQuery, UpdateQuantityRequest},
    error::AppResult,
    models::ProductId,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_summary).post(add_to_cart))
        .route(
            "/{product_id}",
            put(update_quantity).delete(remove_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines with subtotal and item count", body = ApiResponse<CartSummary>)
    ),
    tag = "Cart"
)]
pub async fn cart_summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(cart_service::cart_summary(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add a line or bump its quantity", body = ApiResponse<CartSummary>),
        (status = 400, description = "Unknown product or unavailable size/color"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = u32, Path, description = "Product ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set; below one removes the line", body = ApiResponse<CartMutation>)
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartMutation>>> {
    Ok(Json(
        cart_service::update_quantity(&state, product_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = u32, Path, description = "Product ID"),
        LineQuery
    ),
    responses(
        (status = 200, description = "OK", body = ApiResponse<CartMutation>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Query(line): Query<LineQuery>,
) -> AppResult<Json<ApiResponse<CartMutation>>> {
    Ok(Json(
        cart_service::remove_from_cart(&state, product_id, line).await?,
    ))
}

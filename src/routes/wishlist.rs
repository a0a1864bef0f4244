use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::wishlist::{WishlistToggle, WishlistView},
    error::AppResult,
    models::ProductId,
    response::ApiResponse,
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist))
        .route("/{product_id}", post(toggle_wishlist))
}

#[utoipa::path(
    get,
    path = "/api/wishlist",
    responses(
        (status = 200, description = "List wishlist", body = ApiResponse<WishlistView>)
    ),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WishlistView>>> {
    Ok(Json(wishlist_service::list_wishlist(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/wishlist/{product_id}",
    params(
        ("product_id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Added to or removed from the wishlist", body = ApiResponse<WishlistToggle>)
    ),
    tag = "Wishlist"
)]
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<WishlistToggle>>> {
    Ok(Json(wishlist_service::toggle_wishlist(&state, product_id).await?))
}

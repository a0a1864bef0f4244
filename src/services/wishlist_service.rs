use crate::{
    audit::log_audit,
    dto::wishlist::{WishlistToggle, WishlistView},
    error::AppResult,
    models::ProductId,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_wishlist(state: &AppState) -> AppResult<ApiResponse<WishlistView>> {
    let store = state.lock().await;
    let view = WishlistView {
        ids: store.wishlist().ids().collect(),
        items: store.wishlist_items(),
    };
    let meta = Meta::new(store.wishlist().len());
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

pub async fn toggle_wishlist(
    state: &AppState,
    product_id: ProductId,
) -> AppResult<ApiResponse<WishlistToggle>> {
    let mut store = state.lock().await;
    let wishlisted = store.toggle_wishlist(product_id);
    let action = if wishlisted { "wishlist_add" } else { "wishlist_remove" };
    log_audit(
        action,
        Some("wishlist"),
        Some(serde_json::json!({ "product_id": product_id })),
    );
    let message = if wishlisted {
        "Added to wishlist"
    } else {
        "Removed from wishlist"
    };
    let data = WishlistToggle {
        product_id,
        wishlisted,
        count: store.wishlist().len(),
    };
    Ok(ApiResponse::success(message, data, Some(Meta::empty())))
}

use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartMutation, CartSummary, LineQuery, UpdateQuantityRequest},
    error::{AppError, AppResult},
    models::ProductId,
    response::{ApiResponse, Meta},
    state::AppState,
    store::QuantityChange,
};

pub async fn cart_summary(state: &AppState) -> AppResult<ApiResponse<CartSummary>> {
    let store = state.lock().await;
    let summary = CartSummary::from(store.cart());
    let meta = Meta::new(summary.line_count);
    Ok(ApiResponse::success("OK", summary, Some(meta)))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    let mut store = state.lock().await;
    let product = store
        .product(payload.product_id)
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;
    if !product.sizes.contains(&payload.size) || !product.colors.contains(&payload.color) {
        return Err(AppError::BadRequest(
            "Please select a size and color.".to_string(),
        ));
    }

    let quantity = store
        .add_to_cart(payload.product_id, payload.size, &payload.color)
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    log_audit(
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({
            "product_id": payload.product_id,
            "size": payload.size.as_str(),
            "color": payload.color,
            "quantity": quantity,
        })),
    );
    let summary = CartSummary::from(store.cart());
    let meta = Meta::new(summary.line_count);
    Ok(ApiResponse::success("Added to cart", summary, Some(meta)))
}

pub async fn update_quantity(
    state: &AppState,
    product_id: ProductId,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartMutation>> {
    let quantity = u32::try_from(payload.quantity.max(0)).unwrap_or(u32::MAX);
    let line = LineQuery {
        size: payload.size,
        color: payload.color,
    };

    let mut store = state.lock().await;
    let change = match line.key_for(product_id) {
        Some(key) => store.update_line_quantity(&key, quantity),
        None => store.update_quantity(product_id, quantity),
    };

    if change != QuantityChange::Missing {
        log_audit(
            "cart_update",
            Some("cart"),
            Some(serde_json::json!({ "product_id": product_id, "quantity": quantity })),
        );
    }
    let data = CartMutation {
        change,
        cart: CartSummary::from(store.cart()),
    };
    Ok(ApiResponse::success("OK", data, Some(Meta::empty())))
}

pub async fn remove_from_cart(
    state: &AppState,
    product_id: ProductId,
    line: LineQuery,
) -> AppResult<ApiResponse<CartMutation>> {
    let mut store = state.lock().await;
    let removed = match line.key_for(product_id) {
        Some(key) => store.remove_from_cart(&key),
        None => store.remove_product_from_cart(product_id).is_some(),
    };

    let change = if removed {
        log_audit(
            "cart_remove",
            Some("cart"),
            Some(serde_json::json!({ "product_id": product_id })),
        );
        QuantityChange::Removed
    } else {
        QuantityChange::Missing
    };
    let data = CartMutation {
        change,
        cart: CartSummary::from(store.cart()),
    };
    Ok(ApiResponse::success(
        "Removed from cart",
        data,
        Some(Meta::empty()),
    ))
}

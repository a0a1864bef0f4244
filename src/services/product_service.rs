use crate::{
    dto::products::{ProductDetail, ProductList},
    error::{AppError, AppResult},
    models::ProductId,
    response::{ApiResponse, Meta},
    seed::{SizeGuideRow, size_guide},
    state::AppState,
    store::Facets,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let store = state.lock().await;
    let items = store.visible_products().to_vec();
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<ProductDetail>> {
    let store = state.lock().await;
    let product = store.product(id).cloned().ok_or(AppError::NotFound)?;
    let detail = ProductDetail {
        discount_percent: product.discount_percent(),
        wishlisted: store.is_wishlisted(id),
        product,
    };
    Ok(ApiResponse::success("Product", detail, None))
}

pub async fn search_products(state: &AppState, term: &str) -> AppResult<ApiResponse<ProductList>> {
    let store = state.lock().await;
    let items = store.search(term);
    tracing::debug!(term, hits = items.len(), "catalog searched");
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Search results", ProductList { items }, Some(meta)))
}

pub async fn facets(state: &AppState) -> AppResult<ApiResponse<Facets>> {
    let store = state.lock().await;
    Ok(ApiResponse::success("Facets", store.facets(), None))
}

pub fn size_guide_table() -> ApiResponse<Vec<SizeGuideRow>> {
    let rows = size_guide();
    let meta = Meta::new(rows.len());
    ApiResponse::success("Size guide", rows, Some(meta))
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::{
        products::{ProductDetail, ProductList, SearchQuery},
        reviews::ReviewRequest,
    },
    error::AppResult,
    models::{ProductId, Review},
    response::ApiResponse,
    seed::SizeGuideRow,
    services::{product_service, review_service},
    state::AppState,
    store::Facets,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/facets", get(facets))
        .route("/search", get(search_products))
        .route("/size-guide", get(size_guide))
        .route("/{id}", get(get_product))
        .route("/{id}/reviews", post(submit_review))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Catalog narrowed and ordered by the current filters", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(product_service::list_products(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<ProductId>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    Ok(Json(product_service::get_product(&state, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products matching the term; empty for a blank term", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(product_service::search_products(&state, &query.q).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/facets",
    responses(
        (status = 200, description = "Categories, sizes and colors present in the catalog", body = ApiResponse<Facets>)
    ),
    tag = "Products"
)]
pub async fn facets(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Facets>>> {
    Ok(Json(product_service::facets(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/size-guide",
    responses(
        (status = 200, description = "Chest and waist measurements per size", body = ApiResponse<Vec<SizeGuideRow>>)
    ),
    tag = "Products"
)]
pub async fn size_guide() -> Json<ApiResponse<Vec<SizeGuideRow>>> {
    Json(product_service::size_guide_table())
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/reviews",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review stored", body = ApiResponse<Review>),
        (status = 400, description = "Missing rating, name or comment"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    Ok(Json(review_service::submit_review(&state, id, payload).await?))
}

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    dto::filters::{SetMaxPriceRequest, SetSortRequest},
    error::AppResult,
    models::FilterCriteria,
    response::ApiResponse,
    services::filter_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_filters).put(replace_filters).delete(clear_filters),
        )
        .route("/categories/{category}", post(toggle_category))
        .route("/sizes/{size}", post(toggle_size))
        .route("/colors/{color}", post(toggle_color))
        .route("/sort", put(set_sort))
        .route("/max-price", put(set_max_price))
}

#[utoipa::path(
    get,
    path = "/api/filters",
    responses(
        (status = 200, description = "Current filter criteria; meta.total is the visible product count", body = ApiResponse<FilterCriteria>)
    ),
    tag = "Filters"
)]
pub async fn get_filters(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::get_criteria(&state).await?))
}

#[utoipa::path(
    put,
    path = "/api/filters",
    request_body = FilterCriteria,
    responses(
        (status = 200, description = "Criteria replaced", body = ApiResponse<FilterCriteria>),
        (status = 400, description = "Invalid price range"),
    ),
    tag = "Filters"
)]
pub async fn replace_filters(
    State(state): State<AppState>,
    Json(payload): Json<FilterCriteria>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::replace_criteria(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/filters",
    responses(
        (status = 200, description = "Criteria reset to defaults", body = ApiResponse<FilterCriteria>)
    ),
    tag = "Filters"
)]
pub async fn clear_filters(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::clear_criteria(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/filters/categories/{category}",
    params(
        ("category" = String, Path, description = "Category label, e.g. T-Shirts")
    ),
    responses(
        (status = 200, description = "Category toggled", body = ApiResponse<FilterCriteria>),
        (status = 400, description = "Unknown category"),
    ),
    tag = "Filters"
)]
pub async fn toggle_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::toggle_category(&state, &category).await?))
}

#[utoipa::path(
    post,
    path = "/api/filters/sizes/{size}",
    params(
        ("size" = String, Path, description = "Size, XS to XXL")
    ),
    responses(
        (status = 200, description = "Size toggled", body = ApiResponse<FilterCriteria>),
        (status = 400, description = "Unknown size"),
    ),
    tag = "Filters"
)]
pub async fn toggle_size(
    State(state): State<AppState>,
    Path(size): Path<String>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::toggle_size(&state, &size).await?))
}

#[utoipa::path(
    post,
    path = "/api/filters/colors/{color}",
    params(
        ("color" = String, Path, description = "Color token, URL-encoded")
    ),
    responses(
        (status = 200, description = "Color toggled", body = ApiResponse<FilterCriteria>)
    ),
    tag = "Filters"
)]
pub async fn toggle_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::toggle_color(&state, &color).await?))
}

#[utoipa::path(
    put,
    path = "/api/filters/sort",
    request_body = SetSortRequest,
    responses(
        (status = 200, description = "Sort mode set; unknown modes fall back to newest", body = ApiResponse<FilterCriteria>)
    ),
    tag = "Filters"
)]
pub async fn set_sort(
    State(state): State<AppState>,
    Json(payload): Json<SetSortRequest>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::set_sort(&state, payload.sort).await?))
}

#[utoipa::path(
    put,
    path = "/api/filters/max-price",
    request_body = SetMaxPriceRequest,
    responses(
        (status = 200, description = "Upper price bound set", body = ApiResponse<FilterCriteria>),
        (status = 400, description = "Bound below the minimum or negative"),
    ),
    tag = "Filters"
)]
pub async fn set_max_price(
    State(state): State<AppState>,
    Json(payload): Json<SetMaxPriceRequest>,
) -> AppResult<Json<ApiResponse<FilterCriteria>>> {
    Ok(Json(filter_service::set_max_price(&state, payload.max).await?))
}

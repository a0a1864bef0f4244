use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::selection::{OpenModalRequest, SelectionView},
    error::AppResult,
    response::ApiResponse,
    services::selection_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_selection).put(open_modal).delete(close_modal),
    )
}

#[utoipa::path(
    get,
    path = "/api/selection",
    responses(
        (status = 200, description = "Open modal and focused product", body = ApiResponse<SelectionView>)
    ),
    tag = "Selection"
)]
pub async fn get_selection(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SelectionView>>> {
    Ok(Json(selection_service::get_selection(&state).await?))
}

#[utoipa::path(
    put,
    path = "/api/selection",
    request_body = OpenModalRequest,
    responses(
        (status = 200, description = "Modal opened, replacing any open modal", body = ApiResponse<SelectionView>),
        (status = 400, description = "Product modal without a product"),
    ),
    tag = "Selection"
)]
pub async fn open_modal(
    State(state): State<AppState>,
    Json(payload): Json<OpenModalRequest>,
) -> AppResult<Json<ApiResponse<SelectionView>>> {
    Ok(Json(selection_service::open_modal(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/selection",
    responses(
        (status = 200, description = "Modal closed", body = ApiResponse<SelectionView>)
    ),
    tag = "Selection"
)]
pub async fn close_modal(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SelectionView>>> {
    Ok(Json(selection_service::close_modal(&state).await?))
}

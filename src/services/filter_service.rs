use crate::{
    audit::log_audit,
    error::{AppError, AppResult},
    models::{Category, FilterCriteria, Size, SortMode},
    response::{ApiResponse, Meta},
    state::AppState,
    store::Storefront,
};

fn criteria_response(store: &Storefront, message: &str) -> ApiResponse<FilterCriteria> {
    let meta = Meta::new(store.visible_products().len());
    ApiResponse::success(message, store.criteria().clone(), Some(meta))
}

pub async fn get_criteria(state: &AppState) -> AppResult<ApiResponse<FilterCriteria>> {
    let store = state.lock().await;
    Ok(criteria_response(&store, "Filters"))
}

pub async fn replace_criteria(
    state: &AppState,
    criteria: FilterCriteria,
) -> AppResult<ApiResponse<FilterCriteria>> {
    let mut store = state.lock().await;
    store.set_criteria(criteria);
    log_audit(
        "filters_replace",
        Some("filters"),
        serde_json::to_value(store.criteria()).ok(),
    );
    Ok(criteria_response(&store, "Filters updated"))
}

pub async fn clear_criteria(state: &AppState) -> AppResult<ApiResponse<FilterCriteria>> {
    let mut store = state.lock().await;
    store.clear_criteria();
    log_audit("filters_clear", Some("filters"), None);
    Ok(criteria_response(&store, "Filters cleared"))
}

pub async fn toggle_category(state: &AppState, raw: &str) -> AppResult<ApiResponse<FilterCriteria>> {
    let category = Category::parse(raw)
        .ok_or_else(|| AppError::BadRequest(format!("unknown category '{raw}'")))?;
    let mut store = state.lock().await;
    store.toggle_category(category);
    log_audit(
        "filters_toggle_category",
        Some("filters"),
        Some(serde_json::json!({ "category": category.as_str() })),
    );
    Ok(criteria_response(&store, "Filters updated"))
}

pub async fn toggle_size(state: &AppState, raw: &str) -> AppResult<ApiResponse<FilterCriteria>> {
    let size =
        Size::parse(raw).ok_or_else(|| AppError::BadRequest(format!("unknown size '{raw}'")))?;
    let mut store = state.lock().await;
    store.toggle_size(size);
    log_audit(
        "filters_toggle_size",
        Some("filters"),
        Some(serde_json::json!({ "size": size.as_str() })),
    );
    Ok(criteria_response(&store, "Filters updated"))
}

pub async fn toggle_color(state: &AppState, color: &str) -> AppResult<ApiResponse<FilterCriteria>> {
    if color.trim().is_empty() {
        return Err(AppError::BadRequest("color must not be empty".to_string()));
    }
    let mut store = state.lock().await;
    store.toggle_color(color);
    log_audit(
        "filters_toggle_color",
        Some("filters"),
        Some(serde_json::json!({ "color": color })),
    );
    Ok(criteria_response(&store, "Filters updated"))
}

pub async fn set_sort(state: &AppState, sort: SortMode) -> AppResult<ApiResponse<FilterCriteria>> {
    let mut store = state.lock().await;
    store.set_sort(sort);
    log_audit(
        "filters_sort",
        Some("filters"),
        Some(serde_json::json!({ "sort": sort.as_str() })),
    );
    Ok(criteria_response(&store, "Filters updated"))
}

pub async fn set_max_price(state: &AppState, max: f64) -> AppResult<ApiResponse<FilterCriteria>> {
    let mut store = state.lock().await;
    store.set_max_price(max)?;
    log_audit(
        "filters_max_price",
        Some("filters"),
        Some(serde_json::json!({ "max": max })),
    );
    Ok(criteria_response(&store, "Filters updated"))
}

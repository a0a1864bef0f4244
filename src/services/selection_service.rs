use crate::{
    audit::log_audit,
    dto::selection::{OpenModalRequest, SelectionView},
    error::{AppError, AppResult},
    models::Modal,
    response::ApiResponse,
    state::AppState,
    store::Storefront,
};

fn view(store: &Storefront) -> SelectionView {
    let selection = store.selection();
    SelectionView {
        modal: selection.modal(),
        product_id: selection.product_id(),
        product: store.selected_product().cloned(),
    }
}

pub async fn get_selection(state: &AppState) -> AppResult<ApiResponse<SelectionView>> {
    let store = state.lock().await;
    Ok(ApiResponse::success("OK", view(&store), None))
}

pub async fn open_modal(
    state: &AppState,
    payload: OpenModalRequest,
) -> AppResult<ApiResponse<SelectionView>> {
    let mut store = state.lock().await;
    match (payload.modal, payload.product_id) {
        (Modal::ProductDetail, Some(id)) => store.view_details(id),
        (Modal::WriteReview, Some(id)) => store.write_review(id),
        (modal, _) if modal.requires_product() && store.selection().product_id().is_none() => {
            return Err(AppError::BadRequest(
                "product_id is required for this modal".to_string(),
            ));
        }
        (modal, _) => store.open_modal(modal),
    }
    log_audit(
        "modal_open",
        Some("selection"),
        Some(serde_json::json!({
            "modal": payload.modal,
            "product_id": store.selection().product_id(),
        })),
    );
    Ok(ApiResponse::success("OK", view(&store), None))
}

pub async fn close_modal(state: &AppState) -> AppResult<ApiResponse<SelectionView>> {
    let mut store = state.lock().await;
    store.close_modal();
    Ok(ApiResponse::success("OK", view(&store), None))
}

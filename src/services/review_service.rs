use crate::{
    audit::log_audit,
    dto::reviews::ReviewRequest,
    error::{AppError, AppResult},
    models::{NewReview, ProductId, Review},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn submit_review(
    state: &AppState,
    product_id: ProductId,
    payload: ReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    let review = NewReview::try_from(payload)?;
    let author = review.author().to_string();
    let rating = review.rating();

    let mut store = state.lock().await;
    let stored = store
        .submit_review(product_id, review)
        .ok_or(AppError::NotFound)?;

    log_audit(
        "review_submit",
        Some("reviews"),
        Some(serde_json::json!({
            "product_id": product_id,
            "review_id": stored.id,
            "author": author,
            "rating": rating,
        })),
    );
    Ok(ApiResponse::success(
        "Review submitted",
        stored,
        Some(Meta::empty()),
    ))
}

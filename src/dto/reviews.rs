use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{NewReview, ReviewValidationError};

/// The write-review form. A missing rating is sent as 0.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl TryFrom<ReviewRequest> for NewReview {
    type Error = ReviewValidationError;

    fn try_from(req: ReviewRequest) -> Result<Self, Self::Error> {
        NewReview::new(req.author, req.rating, req.comment)
    }
}

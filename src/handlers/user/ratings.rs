use axum::Json;
use serde::Deserialize;

use crate::database::{pool, ratings, stores};
use crate::error::ApiError;
use crate::handlers::Message;
use crate::middleware::{ApiResponse, ApiResult, RequireUser};
use crate::validation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub store_id: i64,
    pub rating: i32,
}

/// POST /api/user/ratings - submit or overwrite the caller's rating for a
/// store
pub async fn submit_rating(
    RequireUser(user): RequireUser,
    Json(payload): Json<SubmitRatingRequest>,
) -> ApiResult<Message> {
    validation::rating(payload.rating)?;

    let db = pool::pool().await?;

    // Pre-check so an unknown store is a 404 rather than a constraint error
    if !stores::exists(db, payload.store_id).await? {
        return Err(ApiError::not_found("Store not found"));
    }

    ratings::upsert(db, user.id, payload.store_id, payload.rating).await?;

    Ok(ApiResponse::success(Message { message: "Rating submitted successfully" }))
}

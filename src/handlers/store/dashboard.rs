use serde::Serialize;

use crate::database::models::RaterRow;
use crate::database::{pool, ratings, stores};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequireOwner};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDashboard {
    pub average_rating: f64,
    pub total_ratings: i64,
    pub raters: Vec<RaterRow>,
}

/// GET /api/store/dashboard - aggregate ratings for the caller's store
pub async fn dashboard(RequireOwner(owner): RequireOwner) -> ApiResult<StoreDashboard> {
    let db = pool::pool().await?;

    let store = stores::find_by_owner(db, owner.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Store not found"))?;

    let summary = ratings::summary_for_store(db, store.id).await?;
    let raters = ratings::raters_for_store(db, store.id).await?;

    Ok(ApiResponse::success(StoreDashboard {
        average_rating: summary.average_rating,
        total_ratings: summary.total_ratings,
        raters,
    }))
}

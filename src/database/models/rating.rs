use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One user's rating of one store, joined with the rater's identity for the
/// owner dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaterRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Average + count for a single store.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average_rating: f64,
    pub total_ratings: i64,
}

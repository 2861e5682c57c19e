use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Store {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

/// Admin listing row: store columns plus aggregated rating data.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListRow {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub rating: f64,
    pub rating_count: i64,
}

/// User-facing listing row: aggregate rating plus the caller's own rating.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStoreRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub overall_rating: f64,
    pub total_ratings: i64,
    pub user_rating: Option<i32>,
}

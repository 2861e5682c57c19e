use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::database::pool::DatabaseError;

/// Global row counts for the admin dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_users: i64,
    pub total_stores: i64,
    pub total_ratings: i64,
}

pub async fn totals(db: &PgPool) -> Result<Totals, DatabaseError> {
    Ok(sqlx::query_as::<_, Totals>(
        "SELECT \
         (SELECT COUNT(*) FROM users) AS total_users, \
         (SELECT COUNT(*) FROM stores) AS total_stores, \
         (SELECT COUNT(*) FROM ratings) AS total_ratings",
    )
    .fetch_one(db)
    .await?)
}

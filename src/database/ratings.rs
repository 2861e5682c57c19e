//! Rating repository: the upsert write plus the owner-dashboard reads.

use sqlx::PgPool;

use crate::database::models::{RaterRow, RatingSummary};
use crate::database::pool::DatabaseError;

/// Insert or overwrite the caller's rating for a store in one atomic
/// statement, keyed by the unique `(user_id, store_id)` constraint. The
/// original `created_at` survives an overwrite.
pub async fn upsert(db: &PgPool, user_id: i64, store_id: i64, rating: i32) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO ratings (user_id, store_id, rating) VALUES ($1, $2, $3) \
         ON CONFLICT (user_id, store_id) DO UPDATE SET rating = EXCLUDED.rating",
    )
    .bind(user_id)
    .bind(store_id)
    .bind(rating)
    .execute(db)
    .await?;
    Ok(())
}

/// Average and count for one store; a store with no ratings reports 0, not
/// NULL.
pub async fn summary_for_store(db: &PgPool, store_id: i64) -> Result<RatingSummary, DatabaseError> {
    Ok(sqlx::query_as::<_, RatingSummary>(
        "SELECT COALESCE(AVG(rating), 0)::float8 AS average_rating, COUNT(*) AS total_ratings \
         FROM ratings WHERE store_id = $1",
    )
    .bind(store_id)
    .fetch_one(db)
    .await?)
}

/// Everyone who rated the store, newest first.
pub async fn raters_for_store(db: &PgPool, store_id: i64) -> Result<Vec<RaterRow>, DatabaseError> {
    Ok(sqlx::query_as::<_, RaterRow>(
        "SELECT u.id, u.name, u.email, r.rating, r.created_at \
         FROM ratings r JOIN users u ON u.id = r.user_id \
         WHERE r.store_id = $1 ORDER BY r.created_at DESC",
    )
    .bind(store_id)
    .fetch_all(db)
    .await?)
}

use axum::extract::Query;
use serde::Deserialize;

use crate::database::models::UserStoreRow;
use crate::database::{pool, stores};
use crate::listing::SortDirection;
use crate::middleware::{ApiResponse, ApiResult, RequireUser};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreBrowseQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// GET /api/user/stores - browse stores with the caller's own rating joined
/// in
pub async fn browse_stores(
    RequireUser(user): RequireUser,
    Query(query): Query<StoreBrowseQuery>,
) -> ApiResult<Vec<UserStoreRow>> {
    let db = pool::pool().await?;

    let sort = stores::UserStoreSortKey::parse(query.sort_by.as_deref());
    let direction = SortDirection::parse(query.sort_order.as_deref());

    let rows = stores::list_for_user(
        db,
        user.id,
        query.name.as_deref(),
        query.address.as_deref(),
        sort,
        direction,
    )
    .await?;
    Ok(ApiResponse::success(rows))
}

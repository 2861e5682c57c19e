use crate::database::{pool, stats};
use crate::middleware::{ApiResponse, ApiResult, RequireAdmin};

/// GET /api/admin/dashboard - global user/store/rating counts
pub async fn dashboard(RequireAdmin(_admin): RequireAdmin) -> ApiResult<stats::Totals> {
    let db = pool::pool().await?;
    let totals = stats::totals(db).await?;
    Ok(ApiResponse::success(totals))
}

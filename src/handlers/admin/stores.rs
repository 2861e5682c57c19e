use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::password;
use crate::database::models::StoreListRow;
use crate::database::{pool, stores, users};
use crate::error::ApiError;
use crate::handlers::auth::normalize_email;
use crate::listing::SortDirection;
use crate::middleware::{ApiResponse, ApiResult, RequireAdmin};
use crate::validation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub owner_password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreated {
    pub message: &'static str,
    pub store_id: i64,
}

/// POST /api/admin/stores - create a store together with its owner account
pub async fn create_store(
    RequireAdmin(_admin): RequireAdmin,
    Json(payload): Json<CreateStoreRequest>,
) -> ApiResult<StoreCreated> {
    validation::new_store(
        &payload.name,
        &payload.email,
        &payload.owner_password,
        payload.address.as_deref(),
    )?;

    let db = pool::pool().await?;
    let email = normalize_email(&payload.email);

    if stores::email_exists(db, &email).await? {
        return Err(ApiError::conflict("Store email already exists"));
    }
    // The owner account reuses the store email, so it must be free there too
    if users::email_exists(db, &email).await? {
        return Err(ApiError::conflict("Email already exists"));
    }

    let password_hash = password::hash_password(&payload.owner_password).await?;
    let store_id = stores::create_with_owner(
        db,
        payload.name.trim(),
        &email,
        &password_hash,
        payload.address.as_deref(),
    )
    .await?;

    Ok(ApiResponse::created(StoreCreated { message: "Store created successfully", store_id }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// GET /api/admin/stores - filtered/sorted listing with rating aggregates
pub async fn list_stores(
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<StoreListQuery>,
) -> ApiResult<Vec<StoreListRow>> {
    let db = pool::pool().await?;

    let filters = stores::StoreFilters {
        name: query.name.as_deref(),
        email: query.email.as_deref(),
        address: query.address.as_deref(),
    };
    let sort = stores::StoreSortKey::parse(query.sort_by.as_deref());
    let direction = SortDirection::parse(query.sort_order.as_deref());

    let rows = stores::list_admin(db, &filters, sort, direction).await?;
    Ok(ApiResponse::success(rows))
}

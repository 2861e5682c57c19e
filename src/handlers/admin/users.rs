use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::password;
use crate::database::models::UserListRow;
use crate::database::{pool, users};
use crate::error::ApiError;
use crate::handlers::auth::normalize_email;
use crate::listing::SortDirection;
use crate::middleware::{ApiResponse, ApiResult, RequireAdmin};
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    pub message: &'static str,
    pub user_id: i64,
}

/// POST /api/admin/users - create a user with any role
pub async fn create_user(
    RequireAdmin(_admin): RequireAdmin,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<UserCreated> {
    let role = validation::new_user(
        &payload.name,
        &payload.email,
        &payload.password,
        payload.address.as_deref(),
        payload.role.as_deref(),
    )?;

    let db = pool::pool().await?;
    let email = normalize_email(&payload.email);

    if users::email_exists(db, &email).await? {
        return Err(ApiError::conflict("Email already exists"));
    }

    let password_hash = password::hash_password(&payload.password).await?;
    let user_id =
        users::insert(db, payload.name.trim(), &email, &password_hash, payload.address.as_deref(), role)
            .await?;

    Ok(ApiResponse::created(UserCreated { message: "User created successfully", user_id }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// GET /api/admin/users - filtered/sorted listing
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Vec<UserListRow>> {
    let db = pool::pool().await?;

    let filters = users::UserFilters {
        name: query.name.as_deref(),
        email: query.email.as_deref(),
        address: query.address.as_deref(),
        role: query.role.as_deref(),
    };
    let sort = users::UserSortKey::parse(query.sort_by.as_deref());
    let direction = SortDirection::parse(query.sort_order.as_deref());

    let rows = users::list(db, &filters, sort, direction).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/admin/users/:id - single user detail
pub async fn user_detail(
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> ApiResult<UserListRow> {
    let db = pool::pool().await?;

    let row = users::find_detail(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::success(row))
}

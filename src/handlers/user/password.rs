use axum::Json;
use serde::Deserialize;

use crate::auth::password;
use crate::database::{pool, users};
use crate::error::ApiError;
use crate::handlers::Message;
use crate::middleware::{ApiResponse, ApiResult, Principal};
use crate::validation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// PUT /api/user/password - change the caller's own password. Open to every
/// authenticated role.
pub async fn update_password(
    principal: Principal,
    Json(payload): Json<PasswordChangeRequest>,
) -> ApiResult<Message> {
    validation::password_change(&payload.current_password, &payload.new_password)?;

    let db = pool::pool().await?;
    let stored = users::password_hash(db, principal.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !password::verify_password(&payload.current_password, &stored).await? {
        return Err(ApiError::bad_request("Current password is incorrect"));
    }

    let new_hash = password::hash_password(&payload.new_password).await?;
    users::set_password_hash(db, principal.id, &new_hash).await?;

    Ok(ApiResponse::success(Message { message: "Password updated successfully" }))
}

use axum::Json;
use serde::Deserialize;

use super::{normalize_email, AuthResponse, AuthUserInfo};
use crate::auth::{self, password, Claims};
use crate::database::{pool, users};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
}

/// POST /api/auth/signup - public self-registration, always as the `user`
/// role. Issues a token immediately so the client can log straight in.
pub async fn signup(Json(payload): Json<SignupRequest>) -> ApiResult<AuthResponse> {
    let role = validation::new_user(
        &payload.name,
        &payload.email,
        &payload.password,
        payload.address.as_deref(),
        None,
    )?;

    let db = pool::pool().await?;
    let email = normalize_email(&payload.email);

    if users::email_exists(db, &email).await? {
        return Err(ApiError::conflict("Email already exists"));
    }

    let password_hash = password::hash_password(&payload.password).await?;
    let name = payload.name.trim();
    let id = users::insert(db, name, &email, &password_hash, payload.address.as_deref(), role).await?;

    let claims = Claims::new(id, role);
    let token = auth::generate_token(&claims).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal("Could not issue token")
    })?;

    Ok(ApiResponse::created(AuthResponse {
        token,
        user: AuthUserInfo { id, name: name.to_string(), email, role },
    }))
}

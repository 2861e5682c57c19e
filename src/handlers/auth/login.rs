use axum::Json;
use serde::Deserialize;

use super::{normalize_email, AuthResponse, AuthUserInfo};
use crate::auth::{self, password, Claims};
use crate::database::{pool, users};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - verify credentials and issue a JWT
pub async fn login(Json(payload): Json<LoginRequest>) -> ApiResult<AuthResponse> {
    validation::login(&payload.email, &payload.password)?;

    let db = pool::pool().await?;
    let email = normalize_email(&payload.email);

    // One message for both unknown email and wrong password
    let user = users::find_by_email(db, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password::verify_password(&payload.password, &user.password_hash).await? {
        return Err(invalid_credentials());
    }

    let claims = Claims::new(user.id, user.role);
    let token = auth::generate_token(&claims).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal("Could not issue token")
    })?;

    Ok(ApiResponse::success(AuthResponse {
        token,
        user: AuthUserInfo { id: user.id, name: user.name, email: user.email, role: user.role },
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid email or password")
}

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::auth::{self, Claims, Role};
use crate::error::ApiError;

/// The authenticated identity resolved from a request's bearer token.
///
/// Handlers receive this as an explicit extractor argument; nothing is
/// attached to a shared request context.
#[derive(Clone, Copy, Debug)]
pub struct Principal {
    pub id: i64,
    pub role: Role,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self { id: claims.sub, role: claims.role }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;
        let claims = auth::verify_token(&token).map_err(|e| ApiError::unauthorized(e.to_string()))?;
        Ok(claims.into())
    }
}

/// Extract the token from an `Authorization: Bearer ...` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err(ApiError::unauthorized("Empty bearer token"));
        }
        Ok(token.to_string())
    } else {
        Err(ApiError::unauthorized("Authorization header must use Bearer token format"))
    }
}

fn require_role(principal: Principal, allowed: Role) -> Result<Principal, ApiError> {
    if principal.role == allowed {
        Ok(principal)
    } else {
        Err(ApiError::forbidden(format!("This endpoint requires the {} role", allowed)))
    }
}

/// Principal restricted to the `admin` role; 403 for everyone else.
pub struct RequireAdmin(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        Ok(Self(require_role(principal, Role::Admin)?))
    }
}

/// Principal restricted to the `store_owner` role.
pub struct RequireOwner(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequireOwner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        Ok(Self(require_role(principal, Role::StoreOwner)?))
    }
}

/// Principal restricted to the `user` role.
pub struct RequireUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        Ok(Self(require_role(principal, Role::User)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let err = extract_bearer_token(&headers_with("Basic dXNlcjpwdw==")).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn bearer_token_is_extracted() {
        let token = extract_bearer_token(&headers_with("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn role_gate_passes_matching_role_through() {
        let principal = Principal { id: 7, role: Role::Admin };
        assert!(require_role(principal, Role::Admin).is_ok());

        let err = require_role(Principal { id: 8, role: Role::User }, Role::Admin).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}

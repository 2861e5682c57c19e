mod login;
mod signup;

pub use login::login;
pub use signup::signup;

use serde::Serialize;

use crate::auth::Role;

/// Public identity slice returned with every issued token.
#[derive(Debug, Serialize)]
pub struct AuthUserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUserInfo,
}

/// Lowercased, trimmed form used for storage and lookups.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

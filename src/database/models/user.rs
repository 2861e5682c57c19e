use serde::Serialize;
use sqlx::FromRow;

use crate::auth::Role;

/// Full credential row, only ever used server-side.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: Option<String>,
    pub role: Role,
}

/// Listing/detail row for the admin views. `rating` is the average over the
/// owned store for store owners and NULL for everyone else.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub role: Role,
    pub rating: Option<f64>,
}

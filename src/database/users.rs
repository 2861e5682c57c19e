//! User repository: credential lookups plus the admin listing query.

use sqlx::PgPool;

use crate::auth::Role;
use crate::database::models::{User, UserListRow};
use crate::database::pool::DatabaseError;
use crate::listing::{SortDirection, SqlBuilder};

// Owner rating is averaged over the owned store; NULL for other roles.
const LIST_SELECT: &str = "SELECT u.id, u.name, u.email, u.address, u.role, \
CASE WHEN u.role = 'store_owner' THEN (\
SELECT COALESCE(AVG(r.rating), 0)::float8 \
FROM stores s LEFT JOIN ratings r ON r.store_id = s.id \
WHERE s.owner_id = u.id) END AS rating \
FROM users u";

/// Sortable columns for the admin user listing. Unknown request values fall
/// back to `Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortKey {
    #[default]
    Name,
    Email,
    Address,
    Role,
}

impl UserSortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => UserSortKey::Name,
            Some("email") => UserSortKey::Email,
            Some("address") => UserSortKey::Address,
            Some("role") => UserSortKey::Role,
            _ => UserSortKey::default(),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            UserSortKey::Name => "u.name",
            UserSortKey::Email => "u.email",
            UserSortKey::Address => "u.address",
            UserSortKey::Role => "u.role",
        }
    }
}

#[derive(Debug, Default)]
pub struct UserFilters<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub role: Option<&'a str>,
}

fn build_list(filters: &UserFilters<'_>, sort: UserSortKey, direction: SortDirection) -> (String, Vec<String>) {
    let mut builder = SqlBuilder::new(LIST_SELECT, 0);
    builder.and_contains("u.name", filters.name);
    builder.and_contains("u.email", filters.email);
    builder.and_contains("u.address", filters.address);
    builder.and_eq("u.role", filters.role);
    builder.order_by(sort.as_sql(), direction);
    builder.finish()
}

pub async fn list(
    db: &PgPool,
    filters: &UserFilters<'_>,
    sort: UserSortKey,
    direction: SortDirection,
) -> Result<Vec<UserListRow>, DatabaseError> {
    let (sql, params) = build_list(filters, sort, direction);
    let mut query = sqlx::query_as::<_, UserListRow>(&sql);
    for param in &params {
        query = query.bind(param);
    }
    Ok(query.fetch_all(db).await?)
}

pub async fn find_detail(db: &PgPool, id: i64) -> Result<Option<UserListRow>, DatabaseError> {
    let sql = format!("{} WHERE u.id = $1", LIST_SELECT);
    Ok(sqlx::query_as::<_, UserListRow>(&sql).bind(id).fetch_optional(db).await?)
}

pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, DatabaseError> {
    Ok(sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, address, role FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(db)
    .await?)
}

pub async fn email_exists(db: &PgPool, email: &str) -> Result<bool, DatabaseError> {
    Ok(sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(db)
        .await?)
}

pub async fn insert(
    db: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    address: Option<&str>,
    role: Role,
) -> Result<i64, DatabaseError> {
    Ok(sqlx::query_scalar(
        "INSERT INTO users (name, email, password_hash, address, role) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(address)
    .bind(role)
    .fetch_one(db)
    .await?)
}

pub async fn password_hash(db: &PgPool, id: i64) -> Result<Option<String>, DatabaseError> {
    Ok(sqlx::query_scalar("SELECT password_hash FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?)
}

pub async fn set_password_hash(db: &PgPool, id: i64, hash: &str) -> Result<(), DatabaseError> {
    sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
        .bind(hash)
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}

//! Store repository: creation (with its owner account), existence checks,
//! and the two listing queries.

use sqlx::PgPool;

use crate::auth::Role;
use crate::database::models::{Store, StoreListRow, UserStoreRow};
use crate::database::pool::DatabaseError;
use crate::listing::{SortDirection, SqlBuilder};

const ADMIN_LIST_SELECT: &str = "SELECT s.id, s.owner_id, s.name, s.email, s.address, \
COALESCE(AVG(r.rating), 0)::float8 AS rating, \
COUNT(r.rating) AS rating_count \
FROM stores s \
LEFT JOIN ratings r ON r.store_id = s.id";

// Second join picks out the requesting user's own rating ($1).
const USER_LIST_SELECT: &str = "SELECT s.id, s.name, s.email, s.address, \
COALESCE(AVG(r.rating), 0)::float8 AS overall_rating, \
COUNT(DISTINCT r.user_id) AS total_ratings, \
ur.rating AS user_rating \
FROM stores s \
LEFT JOIN ratings r ON r.store_id = s.id \
LEFT JOIN ratings ur ON ur.store_id = s.id AND ur.user_id = $1";

/// Sortable columns for the admin store listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreSortKey {
    #[default]
    Name,
    Email,
    Address,
    Rating,
}

impl StoreSortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => StoreSortKey::Name,
            Some("email") => StoreSortKey::Email,
            Some("address") => StoreSortKey::Address,
            Some("rating") => StoreSortKey::Rating,
            _ => StoreSortKey::default(),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            StoreSortKey::Name => "s.name",
            StoreSortKey::Email => "s.email",
            StoreSortKey::Address => "s.address",
            // Aggregate alias from the SELECT list
            StoreSortKey::Rating => "rating",
        }
    }
}

/// Sortable columns for the user-facing store listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStoreSortKey {
    #[default]
    Name,
    Address,
    OverallRating,
}

impl UserStoreSortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => UserStoreSortKey::Name,
            Some("address") => UserStoreSortKey::Address,
            Some("overallRating") => UserStoreSortKey::OverallRating,
            _ => UserStoreSortKey::default(),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            UserStoreSortKey::Name => "s.name",
            UserStoreSortKey::Address => "s.address",
            UserStoreSortKey::OverallRating => "overall_rating",
        }
    }
}

#[derive(Debug, Default)]
pub struct StoreFilters<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

fn build_admin_list(
    filters: &StoreFilters<'_>,
    sort: StoreSortKey,
    direction: SortDirection,
) -> (String, Vec<String>) {
    let mut builder = SqlBuilder::new(ADMIN_LIST_SELECT, 0);
    builder.and_contains("s.name", filters.name);
    builder.and_contains("s.email", filters.email);
    builder.and_contains("s.address", filters.address);
    builder.push(" GROUP BY s.id");
    builder.order_by(sort.as_sql(), direction);
    builder.finish()
}

pub async fn list_admin(
    db: &PgPool,
    filters: &StoreFilters<'_>,
    sort: StoreSortKey,
    direction: SortDirection,
) -> Result<Vec<StoreListRow>, DatabaseError> {
    let (sql, params) = build_admin_list(filters, sort, direction);
    let mut query = sqlx::query_as::<_, StoreListRow>(&sql);
    for param in &params {
        query = query.bind(param);
    }
    Ok(query.fetch_all(db).await?)
}

fn build_user_list(
    name: Option<&str>,
    address: Option<&str>,
    sort: UserStoreSortKey,
    direction: SortDirection,
) -> (String, Vec<String>) {
    let mut builder = SqlBuilder::new(USER_LIST_SELECT, 1);
    builder.and_contains("s.name", name);
    builder.and_contains("s.address", address);
    builder.push(" GROUP BY s.id, ur.rating");
    builder.order_by(sort.as_sql(), direction);
    builder.finish()
}

pub async fn list_for_user(
    db: &PgPool,
    user_id: i64,
    name: Option<&str>,
    address: Option<&str>,
    sort: UserStoreSortKey,
    direction: SortDirection,
) -> Result<Vec<UserStoreRow>, DatabaseError> {
    let (sql, params) = build_user_list(name, address, sort, direction);
    let mut query = sqlx::query_as::<_, UserStoreRow>(&sql).bind(user_id);
    for param in &params {
        query = query.bind(param);
    }
    Ok(query.fetch_all(db).await?)
}

pub async fn exists(db: &PgPool, id: i64) -> Result<bool, DatabaseError> {
    Ok(sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stores WHERE id = $1)")
        .bind(id)
        .fetch_one(db)
        .await?)
}

pub async fn email_exists(db: &PgPool, email: &str) -> Result<bool, DatabaseError> {
    Ok(sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stores WHERE email = $1)")
        .bind(email)
        .fetch_one(db)
        .await?)
}

/// The store an owner's dashboard reads. The schema does not forbid multiple
/// stores per owner, so the earliest-created one wins deterministically.
pub async fn find_by_owner(db: &PgPool, owner_id: i64) -> Result<Option<Store>, DatabaseError> {
    Ok(sqlx::query_as::<_, Store>(
        "SELECT id, owner_id, name, email, address FROM stores \
         WHERE owner_id = $1 ORDER BY id LIMIT 1",
    )
    .bind(owner_id)
    .fetch_optional(db)
    .await?)
}

/// Create the owner account and its store in one transaction; both rows
/// appear or neither does.
pub async fn create_with_owner(
    db: &PgPool,
    name: &str,
    email: &str,
    owner_password_hash: &str,
    address: Option<&str>,
) -> Result<i64, DatabaseError> {
    let mut tx = db.begin().await?;

    let owner_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, email, password_hash, address, role) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(owner_password_hash)
    .bind(address)
    .bind(Role::StoreOwner)
    .fetch_one(&mut *tx)
    .await?;

    let store_id: i64 = sqlx::query_scalar(
        "INSERT INTO stores (owner_id, name, email, address) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(owner_id)
    .bind(name)
    .bind(email)
    .bind(address)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(store_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_key_falls_back_to_name() {
        assert_eq!(StoreSortKey::parse(Some("owner_id")), StoreSortKey::Name);
        assert_eq!(StoreSortKey::parse(Some("unknownColumn")), StoreSortKey::Name);
        assert_eq!(StoreSortKey::parse(Some("rating")), StoreSortKey::Rating);

        assert_eq!(UserStoreSortKey::parse(Some("email")), UserStoreSortKey::Name);
        assert_eq!(UserStoreSortKey::parse(Some("overallRating")), UserStoreSortKey::OverallRating);
    }

    #[test]
    fn admin_list_sql_places_filters_before_group_by() {
        let filters = StoreFilters { name: Some("tea"), ..StoreFilters::default() };
        let (sql, params) = build_admin_list(&filters, StoreSortKey::Rating, SortDirection::Desc);

        assert!(sql.ends_with("WHERE s.name ILIKE $1 GROUP BY s.id ORDER BY rating DESC"));
        assert_eq!(params, vec!["%tea%"]);
    }

    #[test]
    fn user_list_sql_numbers_params_after_the_caller_id() {
        let (sql, params) =
            build_user_list(Some("tea"), Some("main"), UserStoreSortKey::default(), SortDirection::Asc);

        // $1 is the caller id bound ahead of the filter params
        assert!(sql.contains("ur.user_id = $1"));
        assert!(sql.contains("WHERE s.name ILIKE $2 AND s.address ILIKE $3"));
        assert!(sql.ends_with("GROUP BY s.id, ur.rating ORDER BY s.name ASC"));
        assert_eq!(params, vec!["%tea%", "%main%"]);
    }
}

pub mod admin;
pub mod auth;
pub mod health;
pub mod store;
pub mod user;

/// Acknowledgement body for writes that return no entity.
#[derive(Debug, serde::Serialize)]
pub struct Message {
    pub message: &'static str,
}

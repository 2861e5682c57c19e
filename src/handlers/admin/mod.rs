mod dashboard;
mod stores;
mod users;

pub use dashboard::dashboard;
pub use stores::{create_store, list_stores};
pub use users::{create_user, list_users, user_detail};

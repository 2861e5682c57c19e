pub mod rating;
pub mod store;
pub mod user;

pub use rating::{RaterRow, RatingSummary};
pub use store::{Store, StoreListRow, UserStoreRow};
pub use user::{User, UserListRow};

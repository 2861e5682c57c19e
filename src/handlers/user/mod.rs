mod password;
mod ratings;
mod stores;

pub use password::update_password;
pub use ratings::submit_rating;
pub use stores::browse_stores;

pub mod models;
pub mod pool;
pub mod ratings;
pub mod stats;
pub mod stores;
pub mod users;

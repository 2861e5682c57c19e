pub mod auth;
pub mod response;

pub use auth::{Principal, RequireAdmin, RequireOwner, RequireUser};
pub use response::{ApiResponse, ApiResult};

// Password hashing on the blocking pool; bcrypt embeds its own salt.

use bcrypt::{hash, verify};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a password with the configured bcrypt cost.
///
/// Runs on the blocking thread pool so a deliberately slow hash does not
/// stall the async runtime.
pub async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_string();
    let cost = config::config().security.bcrypt_cost;

    tokio::task::spawn_blocking(move || hash(password, cost).map_err(PasswordError::from)).await?
}

/// Verify a password against a stored bcrypt hash.
pub async fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    let password = password.to_string();
    let hashed = hashed.to_string();

    tokio::task::spawn_blocking(move || verify(password, &hashed).map_err(PasswordError::from)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_verify_round_trip() {
        let hashed = hash_password("Correct#Horse1").await.unwrap();
        assert!(hashed.starts_with("$2"));

        assert!(verify_password("Correct#Horse1", &hashed).await.unwrap());
        assert!(!verify_password("wrong-password", &hashed).await.unwrap());
    }
}

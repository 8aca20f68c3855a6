//! bcrypt hashing run off the async workers.

use crate::error::{BookshelfError, Result};

/// Hashes a password at the given bcrypt cost.
pub async fn hash_password(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BookshelfError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| BookshelfError::Internal(format!("Password hashing failed: {}", e)))
}

/// Checks a password against a stored bcrypt hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| BookshelfError::Internal(format!("Password check task failed: {}", e)))?
        .map_err(|e| BookshelfError::Internal(format!("Password check failed: {}", e)))
}

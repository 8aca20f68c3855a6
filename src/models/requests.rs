//! Request DTOs for the bookshelf API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for POST /auth/register
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let fields = [&self.name, &self.surname, &self.email, &self.password];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Some("All fields are required".to_string());
        }
        None
    }
}

/// Request body for POST /auth/login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for operations addressing one book (DELETE /favorites,
/// POST /reviews/check).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdRequest {
    #[serde(default)]
    pub book_id: String,
}

impl BookIdRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.book_id.trim().is_empty() {
            return Some("bookId is required".to_string());
        }
        None
    }
}

//! Error types for the bookshelf server
//!
//! Provides unified error handling using thiserror.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Upstream ==
/// Identifies which upstream call produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// All-time trending list
    Alltime,
    /// Yearly trending list
    Yearly,
    /// Bulk edition page-count lookup
    PageLookup,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Upstream::Alltime => "alltime",
            Upstream::Yearly => "yearly",
            Upstream::PageLookup => "page lookup",
        };
        f.write_str(name)
    }
}

// == Bookshelf Error Enum ==
/// Unified error type for the bookshelf server.
#[derive(Error, Debug)]
pub enum BookshelfError {
    /// Upstream answered with a non-success status
    #[error("Failed to fetch {upstream}: upstream returned status {status}")]
    FetchFailure { upstream: Upstream, status: u16 },

    /// Upstream could not be reached
    #[error("Request to {upstream} failed: {message}")]
    Transport { upstream: Upstream, message: String },

    /// Upstream body did not match the expected shape
    #[error("Invalid response from {upstream}: {message}")]
    Decode { upstream: Upstream, message: String },

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or invalid credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookshelfError {
    /// Returns the upstream involved, if this is an upstream failure.
    pub fn upstream(&self) -> Option<Upstream> {
        match self {
            BookshelfError::FetchFailure { upstream, .. }
            | BookshelfError::Transport { upstream, .. }
            | BookshelfError::Decode { upstream, .. } => Some(*upstream),
            _ => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for BookshelfError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            BookshelfError::FetchFailure { .. }
            | BookshelfError::Transport { .. }
            | BookshelfError::Decode { .. } => {
                tracing::error!(error = %self, "Upstream catalog failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            BookshelfError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            BookshelfError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            BookshelfError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            BookshelfError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the bookshelf server.
pub type Result<T> = std::result::Result<T, BookshelfError>;

//! Response DTOs for the bookshelf API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::accounts::Account;
use crate::catalog::CatalogStats;

/// Plain confirmation body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl From<&Account> for UserResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            surname: account.surname.clone(),
            email: account.email.clone(),
        }
    }
}

/// Response body for POST /auth/register and POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Set on registration only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub token: String,
    pub user: UserResponse,
}

/// Response body for POST /reviews/check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCheckResponse {
    pub is_reviewed: bool,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Requests served from the cache
    pub hits: u64,
    /// Requests that found the cache empty
    pub misses: u64,
    /// Catalog builds started
    pub builds: u64,
    /// Catalog builds that failed
    pub failures: u64,
    /// Upstream requests issued
    pub upstream_requests: u64,
    /// Books currently cached
    pub cached_books: usize,
    /// Whether the catalog is cached
    pub cached: bool,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CatalogStats, cached: bool) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            builds: stats.builds,
            failures: stats.failures,
            upstream_requests: stats.upstream_requests,
            cached_books: stats.cached_books,
            cached,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

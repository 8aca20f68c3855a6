//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default number of works requested from each trending list
pub const DEFAULT_TRENDING_LIMIT: usize = 300;

/// Default number of edition keys per page-lookup request
pub const DEFAULT_PAGE_BATCH_SIZE: usize = 100;

/// Default bcrypt cost for stored passwords
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream catalog API
    pub catalog_base_url: String,
    /// Works requested from each trending list
    pub trending_limit: usize,
    /// Edition keys per page-lookup request
    pub page_batch_size: usize,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Populate the catalog in the background at startup
    pub warm_catalog: bool,
    /// Secret used to sign session tokens; random per process when unset
    pub jwt_secret: String,
    /// Session token lifetime in hours
    pub token_ttl_hours: i64,
    /// bcrypt cost for password hashes
    pub bcrypt_cost: u32,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 4000)
    /// - `CATALOG_BASE_URL` - Upstream API (default: https://openlibrary.org)
    /// - `TRENDING_LIMIT` - Works per trending list (default: 300)
    /// - `PAGE_BATCH_SIZE` - Editions per page lookup (default: 100)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    /// - `WARM_CATALOG` - Fetch the catalog at startup (default: true)
    /// - `JWT_SECRET` - Token signing secret (default: random per process)
    /// - `TOKEN_TTL_HOURS` - Token lifetime (default: 24)
    /// - `BCRYPT_COST` - Password hashing cost, 4 to 31 (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let page_batch_size = match env_or("PAGE_BATCH_SIZE", defaults.page_batch_size) {
            0 => defaults.page_batch_size,
            n => n,
        };

        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.catalog_base_url),
            trending_limit: env_or("TRENDING_LIMIT", defaults.trending_limit),
            page_batch_size,
            upstream_timeout: env_or("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout),
            warm_catalog: env_or("WARM_CATALOG", defaults.warm_catalog),
            jwt_secret: env::var("JWT_SECRET")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.jwt_secret),
            token_ttl_hours: env_or("TOKEN_TTL_HOURS", defaults.token_ttl_hours),
            bcrypt_cost: match env_or("BCRYPT_COST", defaults.bcrypt_cost) {
                cost @ 4..=31 => cost,
                _ => defaults.bcrypt_cost,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 4000,
            catalog_base_url: "https://openlibrary.org".to_string(),
            trending_limit: DEFAULT_TRENDING_LIMIT,
            page_batch_size: DEFAULT_PAGE_BATCH_SIZE,
            upstream_timeout: 30,
            warm_catalog: true,
            jwt_secret: uuid::Uuid::new_v4().to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

//! Catalog Statistics Module
//!
//! Tracks how often the catalog is served from cache versus rebuilt.

use serde::Serialize;

// == Catalog Stats ==
/// Tracks catalog cache and upstream activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStats {
    /// Requests served from the cache
    pub hits: u64,
    /// Requests that found the cache empty
    pub misses: u64,
    /// Pipeline runs started
    pub builds: u64,
    /// Pipeline runs that failed
    pub failures: u64,
    /// Individual upstream HTTP requests issued
    pub upstream_requests: u64,
    /// Books in the cached catalog
    pub cached_books: usize,
}

impl CatalogStats {
    // == Constructor ==
    /// Creates a new CatalogStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was requested.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_build(&mut self) {
        self.builds += 1;
    }

    /// Adds upstream requests issued by a pipeline run.
    pub fn record_requests(&mut self, count: u64) {
        self.upstream_requests += count;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn set_cached_books(&mut self, count: usize) {
        self.cached_books = count;
    }
}

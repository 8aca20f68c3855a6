//! Catalog Warm-up Task
//!
//! Background task that builds the catalog once at startup so the first
//! client request is served from the cache.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::catalog::BookAggregator;

/// Spawns a task that populates the catalog cache once.
///
/// A failure is logged and leaves the cache empty; the first request then
/// retries the build.
///
/// # Example
/// ```ignore
/// let warmup_handle = spawn_warmup_task(state.catalog.clone());
/// // Later, during shutdown:
/// warmup_handle.abort();
/// ```
pub fn spawn_warmup_task(catalog: Arc<BookAggregator>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Warming catalog cache");

        match catalog.get_catalog().await {
            Ok(books) => info!("Catalog warm-up complete: {} books cached", books.len()),
            Err(e) => warn!("Catalog warm-up failed, will retry on first request: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{plain_work, FakeSource};
    use crate::catalog::{AggregatorSettings, Ranking};

    #[tokio::test]
    async fn test_warmup_populates_cache() {
        let source = Arc::new(FakeSource::new(vec![plain_work("/works/A", "A")], vec![]));
        let catalog = Arc::new(BookAggregator::new(source.clone(), AggregatorSettings::default()));

        spawn_warmup_task(catalog.clone()).await.unwrap();

        assert!(catalog.is_cached());
        catalog.get_catalog().await.unwrap();
        assert_eq!(source.trending_calls(), 2);
    }

    #[tokio::test]
    async fn test_warmup_failure_leaves_cache_empty() {
        let source = Arc::new(FakeSource::new(vec![plain_work("/works/A", "A")], vec![]));
        source.fail_trending(Ranking::Yearly, 500);
        let catalog = Arc::new(BookAggregator::new(source.clone(), AggregatorSettings::default()));

        spawn_warmup_task(catalog.clone()).await.unwrap();
        assert!(!catalog.is_cached());

        source.clear_failures();
        assert!(catalog.get_catalog().await.is_ok());
    }
}

//! Book Aggregator Module
//!
//! Builds the catalog from the upstream source and serves it from the cache.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::catalog::pipeline::{batches, build_records, edition_keys, merge_unique};
use crate::catalog::source::{CatalogSource, Ranking};
use crate::catalog::{CatalogCache, CatalogStats, SharedCatalog};
use crate::config::{Config, DEFAULT_PAGE_BATCH_SIZE, DEFAULT_TRENDING_LIMIT};
use crate::error::Result;

// == Aggregator Settings ==
/// Upstream request sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorSettings {
    /// Works requested from each trending list
    pub trending_limit: usize,
    /// Edition keys per page-lookup request
    pub page_batch_size: usize,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            trending_limit: DEFAULT_TRENDING_LIMIT,
            page_batch_size: DEFAULT_PAGE_BATCH_SIZE,
        }
    }
}

impl From<&Config> for AggregatorSettings {
    fn from(config: &Config) -> Self {
        Self {
            trending_limit: config.trending_limit,
            page_batch_size: config.page_batch_size.max(1),
        }
    }
}

// == Book Aggregator ==
/// Aggregates trending works into the cached catalog.
pub struct BookAggregator {
    source: Arc<dyn CatalogSource>,
    cache: CatalogCache,
    settings: AggregatorSettings,
    stats: Mutex<CatalogStats>,
    /// Serializes cache fills so concurrent first callers share one build
    fill_lock: Mutex<()>,
}

impl BookAggregator {
    /// Creates an aggregator with an in-memory cache.
    pub fn new(source: Arc<dyn CatalogSource>, settings: AggregatorSettings) -> Self {
        Self::with_cache(source, settings, CatalogCache::new())
    }

    /// Creates an aggregator over an existing cache.
    pub fn with_cache(
        source: Arc<dyn CatalogSource>,
        settings: AggregatorSettings,
        cache: CatalogCache,
    ) -> Self {
        Self {
            source,
            cache,
            settings,
            stats: Mutex::new(CatalogStats::new()),
            fill_lock: Mutex::new(()),
        }
    }

    // == Get Catalog ==
    /// Returns the catalog, building it on first use.
    ///
    /// A failed build leaves the cache empty so the next call retries.
    pub async fn get_catalog(&self) -> Result<SharedCatalog> {
        if let Some(books) = self.cache.get() {
            self.stats.lock().await.record_hit();
            return Ok(books);
        }

        let _fill = self.fill_lock.lock().await;

        // Another caller may have filled the cache while we waited
        if let Some(books) = self.cache.get() {
            self.stats.lock().await.record_hit();
            return Ok(books);
        }

        {
            let mut stats = self.stats.lock().await;
            stats.record_miss();
            stats.record_build();
        }

        match self.build().await {
            Ok(books) => {
                let books: SharedCatalog = Arc::new(books);
                self.cache.set(books.clone());
                self.stats.lock().await.set_cached_books(books.len());
                info!(books = books.len(), "Catalog cached");
                Ok(books)
            }
            Err(e) => {
                self.stats.lock().await.record_failure();
                warn!(error = %e, "Catalog build failed, cache left empty");
                Err(e)
            }
        }
    }

    async fn build(&self) -> Result<Vec<crate::catalog::BookRecord>> {
        let limit = self.settings.trending_limit;

        self.stats.lock().await.record_requests(2);
        let (alltime, yearly) = tokio::try_join!(
            self.source.trending(Ranking::Alltime, limit),
            self.source.trending(Ranking::Yearly, limit),
        )?;
        debug!(
            alltime = alltime.len(),
            yearly = yearly.len(),
            "Fetched trending lists"
        );

        let works = merge_unique(alltime, yearly);
        let keys = edition_keys(&works);
        let chunks = batches(&keys, self.settings.page_batch_size);
        debug!(
            works = works.len(),
            editions = keys.len(),
            lookups = chunks.len(),
            "Resolving page counts"
        );

        self.stats.lock().await.record_requests(chunks.len() as u64);
        let lookups = chunks
            .into_iter()
            .map(|chunk| self.source.edition_pages(chunk));
        let pages: Vec<_> = try_join_all(lookups).await?.into_iter().flatten().collect();

        Ok(build_records(&works, &pages))
    }

    // == Clear ==
    /// Empties the cache; the next `get_catalog` rebuilds.
    pub async fn clear(&self) {
        let _fill = self.fill_lock.lock().await;
        self.cache.clear();
        self.stats.lock().await.set_cached_books(0);
        info!("Catalog cache cleared");
    }

    /// Returns true once a catalog has been cached.
    pub fn is_cached(&self) -> bool {
        self.cache.is_populated()
    }

    /// Returns a snapshot of the current statistics.
    pub async fn stats(&self) -> CatalogStats {
        self.stats.lock().await.clone()
    }
}

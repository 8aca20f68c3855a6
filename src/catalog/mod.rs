//! Catalog Module
//!
//! Aggregates trending works from the upstream catalog into normalized book
//! records and caches the result for the lifetime of the process.

mod aggregator;
mod cache;
mod index;
pub mod models;
pub mod pipeline;
pub mod source;
mod stats;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public types
pub use aggregator::{AggregatorSettings, BookAggregator};
pub use cache::{CacheStorage, CatalogCache, MemoryStorage, SharedCatalog};
pub use index::TitleIndex;
pub use models::{BookRecord, EditionPageInfo, TrendingWork};
pub use source::{CatalogSource, OpenLibraryClient, Ranking};
pub use stats::CatalogStats;

//! Catalog Cache Module
//!
//! Write-once holder for the aggregated catalog. The backing storage is
//! injectable so callers (and tests) control where the list lives and can
//! reset it without restarting the process.

use std::sync::{Arc, RwLock};

use crate::catalog::BookRecord;

/// The catalog as shared between the cache and its readers.
pub type SharedCatalog = Arc<Vec<BookRecord>>;

// == Storage Trait ==
/// Backing storage for a `CatalogCache`.
pub trait CacheStorage: Send + Sync {
    /// Returns the stored catalog, if any.
    fn load(&self) -> Option<SharedCatalog>;
    /// Replaces the stored catalog.
    fn store(&self, books: SharedCatalog);
    /// Drops the stored catalog.
    fn clear(&self);
}

// == Memory Storage ==
/// Process-lifetime storage in a single slot.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RwLock<Option<SharedCatalog>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStorage for MemoryStorage {
    fn load(&self) -> Option<SharedCatalog> {
        let slot = self.slot.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.clone()
    }

    fn store(&self, books: SharedCatalog) {
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(books);
    }

    fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
    }
}

// == Catalog Cache ==
/// Cache for the aggregated catalog.
///
/// Two states: empty and populated. Nothing expires; only `clear` empties it.
pub struct CatalogCache {
    storage: Box<dyn CacheStorage>,
}

impl CatalogCache {
    /// Creates a cache backed by process memory.
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Creates a cache backed by the given storage.
    pub fn with_storage(storage: impl CacheStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    // == Get ==
    /// Returns the cached catalog, if populated.
    pub fn get(&self) -> Option<SharedCatalog> {
        self.storage.load()
    }

    // == Set ==
    /// Stores the catalog, replacing any previous one.
    pub fn set(&self, books: SharedCatalog) {
        self.storage.store(books);
    }

    // == Clear ==
    /// Returns the cache to the empty state.
    pub fn clear(&self) {
        self.storage.clear();
    }

    /// Returns true once a catalog has been stored.
    pub fn is_populated(&self) -> bool {
        self.get().is_some()
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache")
            .field("populated", &self.is_populated())
            .finish()
    }
}

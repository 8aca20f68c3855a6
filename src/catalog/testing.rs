//! In-memory catalog source for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::catalog::models::{EditionDoc, EditionList};
use crate::catalog::pipeline::bare_edition_id;
use crate::catalog::source::{CatalogSource, Ranking};
use crate::catalog::{EditionPageInfo, TrendingWork};
use crate::error::{BookshelfError, Result};

pub fn plain_work(key: &str, title: &str) -> TrendingWork {
    TrendingWork {
        key: Some(key.to_string()),
        title: Some(title.to_string()),
        author_name: Some(vec!["Test Author".to_string()]),
        first_publish_year: Some(2001),
        editions: None,
    }
}

pub fn edition_work(key: &str, title: &str, edition: &str) -> TrendingWork {
    TrendingWork {
        editions: Some(EditionList {
            docs: vec![EditionDoc {
                key: Some(edition.to_string()),
            }],
        }),
        ..plain_work(key, title)
    }
}

/// Serves fixed trending lists and page counts, recording every call.
#[derive(Default)]
pub struct FakeSource {
    alltime: Vec<TrendingWork>,
    yearly: Vec<TrendingWork>,
    pages: Mutex<HashMap<String, u32>>,
    trending_failures: Mutex<HashMap<Ranking, u16>>,
    pages_failure: Mutex<Option<u16>>,
    trending_calls: AtomicUsize,
    page_batches: Mutex<Vec<Vec<String>>>,
}

impl FakeSource {
    pub fn new(alltime: Vec<TrendingWork>, yearly: Vec<TrendingWork>) -> Self {
        Self {
            alltime,
            yearly,
            ..Default::default()
        }
    }

    /// Sets page counts keyed the way the lookup API keys them (`OLID:OL1M`).
    pub fn set_pages(&self, pages: &[(&str, u32)]) {
        let mut map = self.pages.lock().unwrap();
        for (edition, count) in pages {
            map.insert(edition.to_string(), *count);
        }
    }

    pub fn fail_trending(&self, ranking: Ranking, status: u16) {
        self.trending_failures.lock().unwrap().insert(ranking, status);
    }

    pub fn fail_pages(&self, status: u16) {
        *self.pages_failure.lock().unwrap() = Some(status);
    }

    pub fn clear_failures(&self) {
        self.trending_failures.lock().unwrap().clear();
        *self.pages_failure.lock().unwrap() = None;
    }

    pub fn trending_calls(&self) -> usize {
        self.trending_calls.load(Ordering::SeqCst)
    }

    pub fn page_batches(&self) -> Vec<Vec<String>> {
        self.page_batches.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.trending_calls() + self.page_batches.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn trending(&self, ranking: Ranking, limit: usize) -> Result<Vec<TrendingWork>> {
        self.trending_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let failure = self.trending_failures.lock().unwrap().get(&ranking).copied();
        if let Some(status) = failure {
            return Err(BookshelfError::FetchFailure {
                upstream: ranking.upstream(),
                status,
            });
        }

        let works = match ranking {
            Ranking::Alltime => &self.alltime,
            Ranking::Yearly => &self.yearly,
        };
        Ok(works.iter().take(limit).cloned().collect())
    }

    async fn edition_pages(&self, edition_keys: &[String]) -> Result<Vec<EditionPageInfo>> {
        self.page_batches.lock().unwrap().push(edition_keys.to_vec());
        tokio::task::yield_now().await;

        let failure = *self.pages_failure.lock().unwrap();
        if let Some(status) = failure {
            return Err(BookshelfError::FetchFailure {
                upstream: crate::error::Upstream::PageLookup,
                status,
            });
        }

        let pages = self.pages.lock().unwrap();
        Ok(edition_keys
            .iter()
            .map(|key| {
                let bibkey = format!("OLID:{}", bare_edition_id(key));
                let count = pages.get(&bibkey).copied();
                EditionPageInfo::new(bibkey, count)
            })
            .collect())
    }
}

//! Catalog Source Module
//!
//! The upstream catalog API behind a trait, with an Open Library client
//! implementing it over HTTP.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::models::{EditionDetails, TrendingResponse};
use crate::catalog::pipeline::bare_edition_id;
use crate::catalog::{EditionPageInfo, TrendingWork};
use crate::error::{BookshelfError, Result, Upstream};

// == Ranking ==
/// Which trending list to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ranking {
    Alltime,
    Yearly,
}

impl Ranking {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ranking::Alltime => "alltime",
            Ranking::Yearly => "yearly",
        }
    }

    /// Upstream tag reported when this list fails to load.
    pub fn upstream(&self) -> Upstream {
        match self {
            Ranking::Alltime => Upstream::Alltime,
            Ranking::Yearly => Upstream::Yearly,
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Source Trait ==
/// Upstream provider of trending works and edition page counts.
///
/// Implementations must be thread-safe as the aggregator shares them across
/// concurrent requests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the top `limit` works of a trending list.
    async fn trending(&self, ranking: Ranking, limit: usize) -> Result<Vec<TrendingWork>>;

    /// Resolves page counts for one batch of edition keys (`/books/OL123M`).
    async fn edition_pages(&self, edition_keys: &[String]) -> Result<Vec<EditionPageInfo>>;
}

// == Open Library Client ==
/// HTTP client for the Open Library trending and books APIs.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bookshelf/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BookshelfError::Internal(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from server configuration.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::new(
            config.catalog_base_url.clone(),
            Duration::from_secs(config.upstream_timeout),
        )
    }

    /// URL of a trending list.
    pub fn trending_url(&self, ranking: Ranking, limit: usize) -> String {
        format!(
            "{}/trending/{}.json?details=false&limit={}&offset=0",
            self.base_url, ranking, limit
        )
    }

    /// URL of a bulk page lookup for a batch of edition keys.
    pub fn pages_url(&self, edition_keys: &[String]) -> String {
        format!(
            "{}/api/books?bibkeys={}&format=json&jscmd=data",
            self.base_url,
            bibkeys(edition_keys)
        )
    }

    async fn get_json<T>(&self, url: &str, upstream: Upstream) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(%url, %upstream, "Requesting upstream");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BookshelfError::Transport {
                upstream,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookshelfError::FetchFailure {
                upstream,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| BookshelfError::Decode {
            upstream,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for OpenLibraryClient {
    async fn trending(&self, ranking: Ranking, limit: usize) -> Result<Vec<TrendingWork>> {
        let url = self.trending_url(ranking, limit);
        let body: TrendingResponse = self.get_json(&url, ranking.upstream()).await?;
        Ok(body.works)
    }

    async fn edition_pages(&self, edition_keys: &[String]) -> Result<Vec<EditionPageInfo>> {
        let url = self.pages_url(edition_keys);
        let body: HashMap<String, EditionDetails> =
            self.get_json(&url, Upstream::PageLookup).await?;
        Ok(page_infos(body))
    }
}

/// Joins edition keys into the `bibkeys` parameter (`OLID:OL1M,OLID:OL2M`).
pub fn bibkeys(edition_keys: &[String]) -> String {
    edition_keys
        .iter()
        .map(|key| format!("OLID:{}", bare_edition_id(key)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Flattens a bulk lookup response into page infos.
pub fn page_infos(body: HashMap<String, EditionDetails>) -> Vec<EditionPageInfo> {
    body.into_iter()
        .map(|(edition, details)| EditionPageInfo::new(edition, details.number_of_pages))
        .collect()
}

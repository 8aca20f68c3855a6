//! Catalog Models
//!
//! Upstream records as the trending and edition APIs return them, and the
//! normalized `BookRecord` served to clients.

use serde::{Deserialize, Serialize};

// == Trending Work ==
/// A work as returned by the trending endpoint.
///
/// Every field is optional upstream; empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendingWork {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub editions: Option<EditionList>,
}

/// Nested `editions` envelope of a trending work.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditionList {
    #[serde(default)]
    pub docs: Vec<EditionDoc>,
}

/// A single edition reference inside a trending work.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditionDoc {
    #[serde(default)]
    pub key: Option<String>,
}

/// Response envelope of the trending endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub works: Vec<TrendingWork>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl TrendingWork {
    /// Identity used for deduplication.
    ///
    /// The work `key` when present, otherwise `title + "_" + first author`.
    pub fn identity(&self) -> String {
        match non_empty(&self.key) {
            Some(key) => key.to_string(),
            None => format!(
                "{}_{}",
                non_empty(&self.title).unwrap_or(""),
                self.first_author().unwrap_or("")
            ),
        }
    }

    /// First listed author, if any.
    pub fn first_author(&self) -> Option<&str> {
        self.author_name
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Key of the first listed edition, e.g. `/books/OL123M`.
    pub fn edition_key(&self) -> Option<&str> {
        self.editions
            .as_ref()
            .and_then(|list| list.docs.first())
            .and_then(|doc| non_empty(&doc.key))
    }
}

// == Edition Page Info ==
/// Page count resolved for one edition by the bulk lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionPageInfo {
    /// Identifier as keyed by the lookup API, e.g. `OLID:OL123M`
    pub edition: String,
    /// Page count, `None` when missing or zero
    pub pages: Option<u32>,
}

impl EditionPageInfo {
    pub fn new(edition: impl Into<String>, pages: Option<u32>) -> Self {
        Self {
            edition: edition.into(),
            pages: pages.filter(|&p| p > 0),
        }
    }
}

/// Per-edition payload of the bulk lookup endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditionDetails {
    #[serde(default)]
    pub number_of_pages: Option<u32>,
}

// == Book Record ==
/// Normalized, edition-enriched book served to clients.
///
/// `title` doubles as the join key for favorites and reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: Option<String>,
    pub author: Option<Vec<String>>,
    pub year: Option<i32>,
    pub pages: Option<u32>,
}

impl BookRecord {
    /// Builds a record from a trending work and its resolved page count.
    pub fn from_work(work: &TrendingWork, pages: Option<u32>) -> Self {
        Self {
            title: non_empty(&work.title).map(str::to_string),
            author: work.author_name.clone().filter(|names| !names.is_empty()),
            year: work.first_publish_year.filter(|&y| y != 0),
            pages,
        }
    }
}

//! Library Models
//!
//! Favorites and reviews as stored per user, plus the aggregated views
//! built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::BookRecord;

/// A book a user marked as favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub book_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

/// A review as submitted by a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl NewReview {
    /// Returns an error message if a required field is empty.
    pub fn validate(&self) -> Option<String> {
        if self.book_id.trim().is_empty()
            || self.title.trim().is_empty()
            || self.review.trim().is_empty()
        {
            return Some("bookId, title and review are required".to_string());
        }
        None
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub book_id: String,
    pub title: String,
    pub review: String,
    pub rating: Option<f64>,
    pub reviewer_name: String,
    pub date_reviewed: DateTime<Utc>,
}

/// A book ranked by how many users favorited it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub book_id: String,
    pub favorite_count: u64,
}

/// A review joined with catalog metadata for its title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListing {
    pub book_id: String,
    pub title: String,
    pub review: String,
    pub reviewer_name: String,
    pub date_reviewed: DateTime<Utc>,
    pub rating: Option<f64>,
    pub author: Option<Vec<String>>,
    pub year: Option<i32>,
    pub pages: Option<u32>,
}

impl ReviewListing {
    pub fn new(review: Review, book: Option<&BookRecord>) -> Self {
        Self {
            book_id: review.book_id,
            title: review.title,
            review: review.review,
            reviewer_name: review.reviewer_name,
            date_reviewed: review.date_reviewed,
            rating: review.rating,
            author: book.and_then(|b| b.author.clone()),
            year: book.and_then(|b| b.year),
            pages: book.and_then(|b| b.pages),
        }
    }
}

//! Library Module
//!
//! Per-user favorites and reviews, and the aggregated views that join them
//! with catalog metadata.

mod models;
mod store;

pub use models::{Favorite, NewReview, PopularBook, Review, ReviewListing};
pub use store::LibraryStore;

use crate::catalog::{BookRecord, TitleIndex};

/// Number of books returned by the popular favorites view
pub const POPULAR_LIMIT: usize = 25;

/// Joins reviews with catalog metadata by title, newest first.
pub fn review_listings(reviews: Vec<Review>, books: &[BookRecord]) -> Vec<ReviewListing> {
    let index = TitleIndex::build(books);
    let mut listings: Vec<ReviewListing> = reviews
        .into_iter()
        .map(|review| {
            let book = index.get(&review.title);
            ReviewListing::new(review, book)
        })
        .collect();
    listings.sort_by(|a, b| b.date_reviewed.cmp(&a.date_reviewed));
    listings
}

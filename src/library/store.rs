//! Library Store Module
//!
//! In-memory per-user favorites and reviews.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::{BookshelfError, Result};
use crate::library::{Favorite, NewReview, PopularBook, Review};

/// Records kept for one user.
#[derive(Debug, Clone, Default)]
struct UserShelf {
    favorites: Vec<Favorite>,
    reviews: Vec<Review>,
}

// == Library Store ==
/// Favorites and reviews of every user, keyed by user id.
///
/// Shelves are visited in the order users first stored something.
#[derive(Debug, Default)]
pub struct LibraryStore {
    users: HashMap<String, UserShelf>,
    order: Vec<String>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn shelf_mut(&mut self, user_id: &str) -> &mut UserShelf {
        if !self.users.contains_key(user_id) {
            self.order.push(user_id.to_string());
        }
        self.users.entry(user_id.to_string()).or_default()
    }

    fn shelves(&self) -> impl Iterator<Item = &UserShelf> {
        self.order.iter().filter_map(|id| self.users.get(id))
    }

    // == Favorites ==
    /// Adds a favorite; fails if the user already favorited the book.
    pub fn add_favorite(&mut self, user_id: &str, mut favorite: Favorite) -> Result<()> {
        if favorite.book_id.trim().is_empty() {
            return Err(BookshelfError::InvalidRequest(
                "bookId is required".to_string(),
            ));
        }

        let shelf = self.shelf_mut(user_id);
        if shelf.favorites.iter().any(|f| f.book_id == favorite.book_id) {
            return Err(BookshelfError::InvalidRequest(
                "Book already in favorites".to_string(),
            ));
        }

        favorite.date_added.get_or_insert_with(Utc::now);
        shelf.favorites.push(favorite);
        Ok(())
    }

    /// Removes a favorite. Returns true if something was removed.
    pub fn remove_favorite(&mut self, user_id: &str, book_id: &str) -> bool {
        match self.users.get_mut(user_id) {
            Some(shelf) => {
                let before = shelf.favorites.len();
                shelf.favorites.retain(|f| f.book_id != book_id);
                shelf.favorites.len() != before
            }
            None => false,
        }
    }

    /// The user's favorites in insertion order.
    pub fn favorites(&self, user_id: &str) -> Vec<Favorite> {
        self.users
            .get(user_id)
            .map(|shelf| shelf.favorites.clone())
            .unwrap_or_default()
    }

    /// Books favorited by the most users, most popular first.
    ///
    /// Ties keep the order in which the books were first seen.
    pub fn popular_favorites(&self, limit: usize) -> Vec<PopularBook> {
        let mut ranked: Vec<PopularBook> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for favorite in self.shelves().flat_map(|shelf| shelf.favorites.iter()) {
            match positions.get(favorite.book_id.as_str()) {
                Some(&pos) => ranked[pos].favorite_count += 1,
                None => {
                    positions.insert(favorite.book_id.as_str(), ranked.len());
                    ranked.push(PopularBook {
                        title: favorite.title.clone(),
                        author: favorite.author.clone(),
                        book_id: favorite.book_id.clone(),
                        favorite_count: 1,
                    });
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.favorite_count.cmp(&a.favorite_count));
        ranked.truncate(limit);
        ranked
    }

    // == Reviews ==
    /// Adds a review; one review per user per book.
    pub fn add_review(
        &mut self,
        user_id: &str,
        reviewer_name: &str,
        review: NewReview,
    ) -> Result<Review> {
        if let Some(error_msg) = review.validate() {
            return Err(BookshelfError::InvalidRequest(error_msg));
        }

        let shelf = self.shelf_mut(user_id);
        if shelf.reviews.iter().any(|r| r.book_id == review.book_id) {
            return Err(BookshelfError::InvalidRequest(
                "You have already reviewed this book".to_string(),
            ));
        }

        let stored = Review {
            book_id: review.book_id,
            title: review.title,
            review: review.review,
            rating: review.rating,
            reviewer_name: reviewer_name.to_string(),
            date_reviewed: Utc::now(),
        };
        shelf.reviews.push(stored.clone());
        Ok(stored)
    }

    pub fn has_reviewed(&self, user_id: &str, book_id: &str) -> bool {
        self.users
            .get(user_id)
            .is_some_and(|shelf| shelf.reviews.iter().any(|r| r.book_id == book_id))
    }

    /// Every review of every user.
    pub fn all_reviews(&self) -> Vec<Review> {
        self.shelves()
            .flat_map(|shelf| shelf.reviews.iter().cloned())
            .collect()
    }
}

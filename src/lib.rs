//! Bookshelf - A book-discovery server
//!
//! Aggregates trending works from Open Library into a cached catalog and
//! serves it alongside user favorites and reviews.

pub mod accounts;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_warmup_task;

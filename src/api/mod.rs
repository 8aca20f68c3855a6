//! API Module
//!
//! HTTP handlers and routing for the bookshelf REST API.
//!
//! # Endpoints
//! - `GET /books` - Aggregated catalog
//! - `DELETE /books/cache` - Clear the catalog cache
//! - `GET /stats` - Catalog cache statistics
//! - `GET /health` - Health check endpoint
//! - `POST /auth/register`, `POST /auth/login` - Accounts
//! - `/favorites`, `/favorites/popular` - Favorites
//! - `/reviews`, `/reviews/check` - Reviews

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::CurrentUser;
pub use handlers::*;
pub use routes::create_router;

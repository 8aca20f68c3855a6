//! API Routes
//!
//! Configures the Axum router with all bookshelf endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_favorite_handler, add_review_handler, books_handler, check_review_handler,
    clear_cache_handler, health_handler, list_favorites_handler, list_reviews_handler,
    login_handler, popular_favorites_handler, register_handler, remove_favorite_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /books` - Aggregated catalog
/// - `DELETE /books/cache` - Clear the catalog cache
/// - `GET /stats` - Catalog cache statistics
/// - `GET /health` - Health check endpoint
/// - `POST /auth/register` - Create an account, returns a token
/// - `POST /auth/login` - Exchange credentials for a token
/// - `GET|POST|DELETE /favorites` - Caller's favorites
/// - `GET /favorites/popular` - Most favorited books
/// - `GET|POST /reviews` - All reviews / add a review
/// - `POST /reviews/check` - Whether the caller reviewed a book
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/books", get(books_handler))
        .route("/books/cache", delete(clear_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route(
            "/favorites",
            get(list_favorites_handler)
                .post(add_favorite_handler)
                .delete(remove_favorite_handler),
        )
        .route("/favorites/popular", get(popular_favorites_handler))
        .route("/reviews", get(list_reviews_handler).post(add_review_handler))
        .route("/reviews/check", post(check_review_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

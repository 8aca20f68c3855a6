//! API Handlers
//!
//! HTTP request handlers for the catalog, accounts, favorites and reviews
//! endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::accounts::{hash_password, verify_password, AccountStore, NewAccount, TokenIssuer};
use crate::catalog::{BookAggregator, CatalogSource, OpenLibraryClient, SharedCatalog};
use crate::error::{BookshelfError, Result};
use crate::library::{
    review_listings, Favorite, LibraryStore, NewReview, PopularBook, ReviewListing, POPULAR_LIMIT,
};
use crate::models::{
    AuthResponse, BookIdRequest, HealthResponse, LoginRequest, MessageResponse, RegisterRequest,
    ReviewCheckResponse, StatsResponse, UserResponse,
};

use super::extract::CurrentUser;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog aggregator and cache
    pub catalog: Arc<BookAggregator>,
    /// Registered accounts
    pub accounts: Arc<RwLock<AccountStore>>,
    /// Session token signing and verification
    pub tokens: Arc<TokenIssuer>,
    /// Favorites and reviews, keyed by account id
    pub library: Arc<RwLock<LibraryStore>>,
}

impl AppState {
    /// Creates a new AppState with an empty library.
    pub fn new(catalog: BookAggregator, accounts: AccountStore, tokens: TokenIssuer) -> Self {
        Self {
            catalog: Arc::new(catalog),
            accounts: Arc::new(RwLock::new(accounts)),
            tokens: Arc::new(tokens),
            library: Arc::new(RwLock::new(LibraryStore::new())),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the Open Library client and aggregator from the Config.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let source: Arc<dyn CatalogSource> = Arc::new(OpenLibraryClient::from_config(config)?);
        Ok(Self::new(
            BookAggregator::new(source, config.into()),
            AccountStore::new(config.bcrypt_cost),
            TokenIssuer::from_config(config),
        ))
    }
}

/// Handler for GET /books
///
/// Returns the aggregated catalog, building it on first use.
pub async fn books_handler(State(state): State<AppState>) -> Result<Json<SharedCatalog>> {
    let books = state.catalog.get_catalog().await?;
    Ok(Json(books))
}

/// Handler for DELETE /books/cache
///
/// Empties the catalog cache so the next request refetches upstream.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.catalog.clear().await;
    Json(MessageResponse::new("Catalog cache cleared"))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.catalog.stats().await;
    Json(StatsResponse::new(&stats, state.catalog.is_cached()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for POST /auth/register
///
/// Creates an account and returns a session token for it.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(BookshelfError::InvalidRequest(error_msg));
    }

    let cost = {
        let accounts = state.accounts.read().await;
        if accounts.email_taken(&req.email) {
            return Err(BookshelfError::InvalidRequest(
                "Email already exists".to_string(),
            ));
        }
        accounts.bcrypt_cost()
    };
    let password_hash = hash_password(req.password, cost).await?;

    // insert re-checks the email in case of a concurrent registration
    let account = state.accounts.write().await.insert(NewAccount {
        name: req.name,
        surname: req.surname,
        email: req.email,
        password_hash,
    })?;
    let token = state.tokens.issue(&account.id)?;
    info!(user_id = %account.id, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: Some(true),
            token,
            user: UserResponse::from(&account),
        }),
    ))
}

/// Handler for POST /auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let invalid = || BookshelfError::Unauthorized("Invalid credentials".to_string());

    let account = state
        .accounts
        .read()
        .await
        .find_by_email(&req.email)
        .cloned()
        .ok_or_else(invalid)?;

    if !verify_password(req.password, account.password_hash.clone()).await? {
        return Err(invalid());
    }

    let token = state.tokens.issue(&account.id)?;
    Ok(Json(AuthResponse {
        success: None,
        token,
        user: UserResponse::from(&account),
    }))
}

/// Handler for GET /favorites
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<Vec<Favorite>> {
    let library = state.library.read().await;
    Json(library.favorites(user.id()))
}

/// Handler for POST /favorites
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(favorite): Json<Favorite>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let mut library = state.library.write().await;
    library.add_favorite(user.id(), favorite)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Added to favorites"))))
}

/// Handler for DELETE /favorites
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<BookIdRequest>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(BookshelfError::InvalidRequest(error_msg));
    }

    let mut library = state.library.write().await;
    library.remove_favorite(user.id(), &req.book_id);

    Ok(Json(MessageResponse::new("Removed from favorites")))
}

/// Handler for GET /favorites/popular
pub async fn popular_favorites_handler(State(state): State<AppState>) -> Json<Vec<PopularBook>> {
    let library = state.library.read().await;
    Json(library.popular_favorites(POPULAR_LIMIT))
}

/// Handler for GET /reviews
///
/// Lists every review, newest first, with author/year/pages taken from the
/// catalog book of the same title.
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewListing>>> {
    let reviews = state.library.read().await.all_reviews();
    let books = state.catalog.get_catalog().await?;
    Ok(Json(review_listings(reviews, &books)))
}

/// Handler for POST /reviews
///
/// The review is signed with the caller's "name surname".
pub async fn add_review_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(review): Json<NewReview>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let mut library = state.library.write().await;
    library.add_review(user.id(), &user.display_name(), review)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Review added"))))
}

/// Handler for POST /reviews/check
pub async fn check_review_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<BookIdRequest>,
) -> Result<Json<ReviewCheckResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(BookshelfError::InvalidRequest(error_msg));
    }

    let library = state.library.read().await;
    Ok(Json(ReviewCheckResponse {
        is_reviewed: library.has_reviewed(user.id(), &req.book_id),
    }))
}

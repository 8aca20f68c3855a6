//! Request Extractors
//!
//! Resolves the calling account from an `Authorization: Bearer` token.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::accounts::Account;
use crate::error::BookshelfError;

use super::handlers::AppState;

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Account);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// "name surname", stored on reviews.
    pub fn display_name(&self) -> String {
        self.0.display_name()
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = BookshelfError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            BookshelfError::Unauthorized("No token, authorization denied".to_string())
        })?;

        let claims = state.tokens.verify(token).inspect_err(|e| {
            warn!("Rejected token: {}", e);
        })?;

        let accounts = state.accounts.read().await;
        let account = accounts
            .get(&claims.sub)
            .cloned()
            .ok_or_else(|| BookshelfError::NotFound("User not found".to_string()))?;

        Ok(CurrentUser(account))
    }
}

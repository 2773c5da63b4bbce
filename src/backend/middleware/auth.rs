/**
 * Authentication Extractor
 *
 * `CurrentUser` reads `Authorization: Bearer <token>` and resolves it through
 * the configured `IdentityProvider`. Handlers that take it as an argument
 * are protected; a missing or rejected token answers 401.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};

use crate::backend::auth::IdentityProvider;
use crate::backend::error::BackendError;

/// Id of the user behind the request's bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub String);

/// Pull the token out of an `Authorization` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<dyn IdentityProvider>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                BackendError::handler(StatusCode::UNAUTHORIZED, "Missing bearer token")
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid authorization header")
        })?;

        let identity = Arc::<dyn IdentityProvider>::from_ref(state);
        let user_id = identity.verify_token(token).await.map_err(|e| {
            tracing::warn!("Token rejected: {}", e);
            BackendError::from(e)
        })?;

        Ok(CurrentUser(user_id))
    }
}

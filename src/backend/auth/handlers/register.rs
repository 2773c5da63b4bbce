/**
 * Register Handler
 *
 * POST /register. Creates an account with the configured identity provider.
 * No session is opened; the client logs in afterwards.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::provider::IdentityProvider;
use crate::backend::error::BackendError;
use crate::shared::{AuthResponse, Credentials};

/// Register a new user
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, weak password, email taken
/// * `502 Bad Gateway` - remote identity service unavailable
pub async fn register(
    State(identity): State<Arc<dyn IdentityProvider>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(credentials) = payload?;
    let (email, password) = credentials.require()?;

    let user = identity.register(&email, &password).await?;

    Ok(Json(AuthResponse { user, session: None }))
}

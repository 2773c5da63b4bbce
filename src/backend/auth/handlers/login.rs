/**
 * Login Handler
 *
 * POST /login. Checks credentials and returns the user with a fresh session.
 * Unknown email and wrong password both answer 401.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::provider::IdentityProvider;
use crate::backend::error::BackendError;
use crate::shared::{AuthResponse, Credentials};

/// Login handler
///
/// # Example Response
///
/// ```json
/// {
///   "user": { "id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com" },
///   "session": {
///     "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "token_type": "bearer",
///     "expires_in": 3600,
///     "user": { "id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com" }
///   }
/// }
/// ```
pub async fn login(
    State(identity): State<Arc<dyn IdentityProvider>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(credentials) = payload?;
    let (email, password) = credentials.require()?;

    let session = identity.login(&email, &password).await?;
    tracing::info!("User {} logged in", session.user.id);

    Ok(Json(AuthResponse {
        user: session.user.clone(),
        session: Some(session),
    }))
}

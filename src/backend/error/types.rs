/**
 * Backend Error Types
 *
 * This module defines the error types used by stores, services and HTTP
 * handlers.
 *
 * # Error Types
 *
 * - `StoreError` - Failures of the durable store (database, migrations)
 * - `BackendError` - Everything a handler can return, with an HTTP status
 *
 * # Status Mapping
 *
 * - Validation failures are client errors (400) and never reach a store
 * - A full contact set is a business failure (500, limit in the message)
 * - A missing record where one is required is 404
 * - Store failures are 500 and carry the underlying message
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::IdentityError;
use crate::shared::SharedError;

/// Errors raised by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Backend-specific error types
///
/// Each variant maps onto an HTTP status through [`BackendError::status_code`]
/// and is rendered as JSON by the `IntoResponse` impl in `conversion`.
///
/// # Usage
///
/// ```rust
/// use biszbo::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::UNAUTHORIZED, "Missing bearer token");
/// let err = BackendError::not_found("User not found or fetch failed");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., malformed header)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// A record that must exist was not found
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// A record that must not exist already does
    #[error("Already exists: {message}")]
    AlreadyExists {
        /// Human-readable error message
        message: String,
    },

    /// Domain-rule error (validation, capacity)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Durable store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Identity provider failure
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `AlreadyExists` - 400 Bad Request
    /// - `SharedError` - 400 for validation, 500 otherwise
    /// - `Store` - 500 Internal Server Error
    /// - `Identity` - Depends on the identity error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::CapacityExceeded { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Identity(err) => err.status_code(),
        }
    }

    /// Get the error message shown to clients
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::AlreadyExists { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Store(err) => err.to_string(),
            Self::Identity(err) => err.to_string(),
        }
    }
}

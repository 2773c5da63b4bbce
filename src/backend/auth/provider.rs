//! Identity provider capability
//!
//! The rest of the backend only sees this trait. Which implementation runs is
//! decided once at startup from `IDENTITY_PROVIDER`.

use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::error::StoreError;
use crate::shared::{IdentityUser, Session};

/// Authentication failures
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Unknown email or wrong password; the two are not distinguished
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Token missing, malformed, expired or for a user that is gone
    #[error("Invalid or expired token: {reason}")]
    InvalidToken { reason: String },

    /// The provider refused the request (duplicate email, weak password...)
    #[error("{message}")]
    Rejected { message: String },

    /// The remote provider could not be reached or failed
    #[error("Identity service unavailable: {message}")]
    Upstream { message: String },

    #[error("Identity store error: {0}")]
    Store(#[from] StoreError),

    #[error("Identity error: {message}")]
    Internal { message: String },
}

impl IdentityError {
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidToken { .. } => StatusCode::UNAUTHORIZED,
            Self::Rejected { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Registration, login and token verification
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account
    async fn register(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError>;

    /// Check credentials and open a session
    async fn login(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Resolve a session token to its user id
    async fn verify_token(&self, token: &str) -> Result<String, IdentityError>;

    /// Short name used in logs and the health report
    fn name(&self) -> &'static str;
}

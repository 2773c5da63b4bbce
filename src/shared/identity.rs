//! Identity payloads
//!
//! Request and response types for registration, login and token checks.
//! These shapes are the same whichever identity provider is configured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Email/password pair sent to `/register` and `/login`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Split into `(email, password)`, rejecting blanks
    pub fn require(self) -> Result<(String, String), SharedError> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| SharedError::validation("email", "Email and password are required"))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| SharedError::validation("password", "Email and password are required"))?;
        Ok((email, password))
    }
}

/// A user as known to the identity provider
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentityUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A signed-in session
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
    pub user: IdentityUser,
}

/// Body returned by `/register` and `/login`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: IdentityUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

/// Body returned by `/me`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeResponse {
    pub id: String,
}

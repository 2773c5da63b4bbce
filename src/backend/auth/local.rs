/**
 * Local Identity Provider
 *
 * Accounts stored by this server: bcrypt password hashes in a `UserStore`
 * and HS256 session tokens from `TokenIssuer`.
 */

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::provider::{IdentityError, IdentityProvider};
use super::sessions::TokenIssuer;
use super::users::{User, UserStore};
use crate::shared::{IdentityUser, Session};

/// Shortest accepted password
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct LocalIdentity {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl LocalIdentity {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }
}

/// Trim and lowercase so lookups are case-insensitive
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_signup(email: &str, password: &str) -> Result<(), IdentityError> {
    let valid_email = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && !domain.is_empty())
        .unwrap_or(false);
    if !valid_email {
        return Err(IdentityError::rejected("Unable to validate email address: invalid format"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(IdentityError::rejected(format!(
            "Password should be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    #[tracing::instrument(skip(self, password))]
    async fn register(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        let email = normalize_email(email);
        validate_signup(&email, password)?;

        // bcrypt blocks; run it off the async workers
        let password = password.to_string();
        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| IdentityError::internal(format!("hash task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!("Password hashing error: {:?}", e);
                IdentityError::internal("Failed to hash password")
            })?;

        let user = User::new(email, password_hash);
        if !self.users.insert(&user).await? {
            tracing::warn!("Registration refused, email already in use");
            return Err(IdentityError::rejected("User already registered"));
        }

        tracing::info!("Registered user {}", user.id);
        Ok(user.to_identity())
    }

    #[tracing::instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let email = normalize_email(email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let candidate = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &hash))
            .await
            .map_err(|e| IdentityError::internal(format!("verify task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!("Password verification error: {:?}", e);
                IdentityError::internal("Failed to verify password")
            })?;

        if !matches {
            tracing::warn!("Invalid password for user {}", user.id);
            return Err(IdentityError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .issue(&user.id.to_string(), &user.email)
            .map_err(|e| {
                tracing::error!("Token generation error: {:?}", e);
                IdentityError::internal("Failed to generate token")
            })?;

        Ok(Session {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.tokens.ttl_secs(),
            user: user.to_identity(),
        })
    }

    async fn verify_token(&self, token: &str) -> Result<String, IdentityError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(|e| IdentityError::invalid_token(e.to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| IdentityError::invalid_token("subject is not a user id"))?;

        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(user.id.to_string()),
            None => Err(IdentityError::invalid_token("user no longer exists")),
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

//! Remote Identity Provider
//!
//! Delegates accounts to a GoTrue-compatible auth service (the API behind
//! Supabase Auth). Requests carry the service key in the `apikey` header.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use super::provider::{IdentityError, IdentityProvider};
use crate::shared::{IdentityUser, Session};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User object as returned by the auth service
#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<RemoteUser> for IdentityUser {
    fn from(user: RemoteUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user
                .created_at
                .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
                .map(|ts| ts.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteSession {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default)]
    expires_in: u64,
    user: RemoteUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Pull a human-readable message out of an error body
fn error_message(body: &Value, status: StatusCode) -> String {
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Identity service returned {}", status))
}

pub struct RemoteIdentity {
    client: Client,
    base_url: String,
    service_key: String,
}

impl RemoteIdentity {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| IdentityError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, IdentityError> {
        request
            .header("apikey", &self.service_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity service request failed: {}", e);
                IdentityError::upstream(e.to_string())
            })
    }

    /// Map a non-success response; `auth_failure` decides which 4xx codes mean bad credentials
    async fn failure(
        response: Response,
        auth_failure: impl Fn(StatusCode) -> Option<IdentityError>,
    ) -> IdentityError {
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let message = error_message(&body, status);

        if status.is_server_error() {
            tracing::error!("Identity service error {}: {}", status, message);
            return IdentityError::upstream(message);
        }
        if let Some(err) = auth_failure(status) {
            return err;
        }
        if status.is_client_error() {
            return IdentityError::rejected(message);
        }
        IdentityError::upstream(message)
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, IdentityError> {
        response
            .json::<T>()
            .await
            .map_err(|e| IdentityError::upstream(format!("Unexpected identity response: {}", e)))
    }
}

#[async_trait]
impl IdentityProvider for RemoteIdentity {
    #[tracing::instrument(skip(self, password))]
    async fn register(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        let request = self
            .client
            .post(self.endpoint("signup"))
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, |_| None).await);
        }

        // Depending on confirmation settings the body is either the user or {user, session}
        let mut body: Value = Self::parse(response).await?;
        let user = if body.get("user").is_some_and(Value::is_object) {
            body["user"].take()
        } else {
            body
        };
        let user: RemoteUser = serde_json::from_value(user)
            .map_err(|e| IdentityError::upstream(format!("Unexpected identity response: {}", e)))?;

        tracing::info!("Registered user {} with remote identity service", user.id);
        Ok(user.into())
    }

    #[tracing::instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let request = self
            .client
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, |status| match status {
                StatusCode::BAD_REQUEST
                | StatusCode::UNAUTHORIZED
                | StatusCode::FORBIDDEN
                | StatusCode::UNPROCESSABLE_ENTITY => Some(IdentityError::InvalidCredentials),
                _ => None,
            })
            .await);
        }

        let session: RemoteSession = Self::parse(response).await?;
        Ok(Session {
            access_token: session.access_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            user: session.user.into(),
        })
    }

    async fn verify_token(&self, token: &str) -> Result<String, IdentityError> {
        let request = self.client.get(self.endpoint("user")).bearer_auth(token);
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, |status| match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Some(IdentityError::invalid_token("rejected by identity service"))
                }
                _ => None,
            })
            .await);
        }

        let user: RemoteUser = Self::parse(response).await?;
        Ok(user.id)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

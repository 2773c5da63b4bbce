/**
 * Error Conversion
 *
 * `IntoResponse` for backend errors, so handlers can return them directly.
 *
 * # Response Format
 *
 * Contact and auth routes answer with:
 * ```json
 * { "error": "Error message", "status": 400 }
 * ```
 *
 * Message-thread routes keep the older `{ "success": false, "message": ... }`
 * body; they wrap the error in [`ThreadApiError`].
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::{BackendError, StoreError};
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::handler(rejection.status(), rejection.body_text())
    }
}

/// Error wrapper for the message-thread routes
#[derive(Debug)]
pub struct ThreadApiError(pub BackendError);

impl From<BackendError> for ThreadApiError {
    fn from(err: BackendError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ThreadApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.into())
    }
}

impl From<SharedError> for ThreadApiError {
    fn from(err: SharedError) -> Self {
        Self(err.into())
    }
}

impl From<StoreError> for ThreadApiError {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ThreadApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let message = self.0.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self.0);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self.0);
        }

        let body = serde_json::json!({
            "success": false,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

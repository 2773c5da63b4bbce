//! Shared Error Types
//!
//! This module defines the errors raised by the domain rules in `shared`.
//! They carry no server context and are wrapped by `backend::error::BackendError`
//! before reaching an HTTP response.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is missing or malformed
//! - `CapacityExceeded` - A contact set already holds the maximum number of entries
//!
//! # Usage
//!
//! ```rust
//! use biszbo::shared::error::SharedError;
//!
//! let error = SharedError::validation("userA", "Missing user IDs");
//! ```
use thiserror::Error;

/// Errors raised by shared domain rules
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The owner's contact set is full
    #[error("Contact limit of {limit} reached for {owner}")]
    CapacityExceeded {
        /// Owner whose set is full
        owner: String,
        /// The configured cap
        limit: usize,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new capacity error
    pub fn capacity(owner: impl Into<String>, limit: usize) -> Self {
        Self::CapacityExceeded {
            owner: owner.into(),
            limit,
        }
    }

    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

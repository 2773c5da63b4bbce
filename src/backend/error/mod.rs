//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used by stores and HTTP handlers and can be converted to
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - StoreError and BackendError
//! └── conversion.rs - IntoResponse implementations
//! ```
//!
//! # Error Types
//!
//! - `StoreError` - Database and migration failures
//! - `BackendError` - HTTP-facing aggregate of every failure a handler can see
//! - `ThreadApiError` - `BackendError` rendered in the message-thread body shape

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ThreadApiError;
pub use types::{BackendError, StoreError};

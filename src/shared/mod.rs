//! Shared Module
//!
//! This module contains the types and rules that do not depend on the server
//! stack: contact records and their invariants, message thread entries,
//! identity payloads, and the request/response bodies of the HTTP API.
//!
//! # Overview
//!
//! Everything here is plain data plus pure functions, so it can be unit
//! tested without a runtime and reused by clients of the API.

/// Shared error types
pub mod error;

/// Messaging types: contacts and message threads
pub mod messaging;

/// Identity payloads
pub mod identity;

/// Opaque identifier parsing
pub mod ids;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use ids::OpaqueId;
pub use identity::{AuthResponse, Credentials, IdentityUser, Session};
pub use messaging::{AddOutcome, ContactRecord, ThreadEntry, MessageThread, CONTACT_LIMIT};

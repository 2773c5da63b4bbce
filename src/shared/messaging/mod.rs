//! Messaging Module
//!
//! Data structures for the messaging side of the API:
//!
//! - `ContactRecord` - A user's contact list and the rules that keep it valid
//! - `MessageThread` / `ThreadEntry` - Append-only message logs
//!
//! # Usage
//!
//! ```rust
//! use biszbo::shared::messaging::{ContactRecord, ThreadEntry};
//! ```

pub mod contact;
pub mod thread;

// Re-export all types
pub use contact::{AddOutcome, ContactAck, ContactPairRequest, ContactRecord, CONTACT_LIMIT};
pub use thread::{
    AppendMessageRequest, AppendOutcome, CreateThreadRequest, GetMessagesRequest,
    MessageThread, SeedMessage, ThreadEntry, ThreadMessagesResponse, ThreadStatusResponse,
};

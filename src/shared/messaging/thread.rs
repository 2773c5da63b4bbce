//! Message Thread Data Structures
//!
//! A thread is an append-only log of entries keyed by an opaque `contentID`.
//! Field names on the wire follow the existing client: `UID` for the author,
//! `message` for the text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::ids::OpaqueId;

/// One message in a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadEntry {
    /// Author's user id
    #[serde(rename = "UID")]
    pub author_id: String,
    /// Message text
    #[serde(rename = "message")]
    pub text: String,
    /// When the entry was stored
    pub timestamp: DateTime<Utc>,
}

impl ThreadEntry {
    /// Create an entry stamped with the current time
    pub fn new(author_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A full thread as returned by the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageThread {
    #[serde(rename = "contentID")]
    pub content_id: String,
    pub messages: Vec<ThreadEntry>,
}

/// Whether an append created the thread or extended it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Created,
    Appended,
}

/// Body of `POST /addMessage`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppendMessageRequest {
    pub message: Option<String>,
    #[serde(rename = "UID")]
    pub uid: Option<OpaqueId>,
    #[serde(rename = "contentID")]
    pub content_id: Option<OpaqueId>,
}

/// Body of `POST /getAllMessages`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GetMessagesRequest {
    #[serde(rename = "contentID")]
    pub content_id: Option<OpaqueId>,
}

/// Seed entry accepted by `POST /createSchema`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedMessage {
    #[serde(rename = "UID")]
    pub uid: Option<OpaqueId>,
    pub message: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `POST /createSchema`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CreateThreadRequest {
    #[serde(rename = "contentID")]
    pub content_id: Option<OpaqueId>,
    pub messages: Option<Vec<SeedMessage>>,
}

/// Plain status body used by append and create
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadStatusResponse {
    pub message: String,
    #[serde(rename = "contentID", skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

/// Body returned by `POST /getAllMessages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadMessagesResponse {
    pub success: bool,
    #[serde(rename = "messageCount")]
    pub message_count: usize,
    pub messages: Vec<ThreadEntry>,
}

impl From<MessageThread> for ThreadMessagesResponse {
    fn from(thread: MessageThread) -> Self {
        Self {
            success: true,
            message_count: thread.messages.len(),
            messages: thread.messages,
        }
    }
}

//! Message Thread HTTP Handlers
//!
//! These routes keep the paths and bodies the existing client speaks:
//!
//! - `POST /addMessage` - append, creating the thread on first use
//! - `POST /getAllMessages` - read a whole thread
//! - `POST /createSchema` - create a thread, optionally seeded

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::store::ThreadStore;
use crate::backend::error::{BackendError, ThreadApiError};
use crate::shared::ids::require_id;
use crate::shared::messaging::{
    AppendMessageRequest, AppendOutcome, CreateThreadRequest, GetMessagesRequest, SeedMessage,
    ThreadEntry, ThreadMessagesResponse, ThreadStatusResponse,
};
use crate::shared::SharedError;

const MISSING_CONTENT_ID: &str = "Invalid or missing contentID";

fn required_text(field: &str, value: Option<String>) -> Result<String, SharedError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| SharedError::validation(field, format!("Missing {}", field)))
}

fn seed_entry(seed: SeedMessage) -> Result<ThreadEntry, SharedError> {
    let author_id = require_id("UID", seed.uid, "Each seed message needs a UID")?;
    let text = required_text("message", seed.message)?;
    let mut entry = ThreadEntry::new(author_id, text);
    if let Some(timestamp) = seed.timestamp {
        entry.timestamp = timestamp;
    }
    Ok(entry)
}

/// Append a message, creating the thread if it does not exist
pub async fn append_message(
    State(threads): State<Arc<dyn ThreadStore>>,
    payload: Result<Json<AppendMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ThreadStatusResponse>), ThreadApiError> {
    let Json(request) = payload?;
    let content_id = require_id("contentID", request.content_id, MISSING_CONTENT_ID)?;
    let author_id = require_id("UID", request.uid, "Missing UID")?;
    let text = required_text("message", request.message)?;

    let outcome = threads
        .append(&content_id, ThreadEntry::new(author_id, text))
        .await?;

    let (status, message) = match outcome {
        AppendOutcome::Created => {
            tracing::info!("Created thread {} with its first message", content_id);
            (StatusCode::CREATED, "New content created with message")
        }
        AppendOutcome::Appended => {
            tracing::debug!("Appended message to thread {}", content_id);
            (StatusCode::OK, "Message added to existing content")
        }
    };

    Ok((
        status,
        Json(ThreadStatusResponse {
            message: message.to_string(),
            content_id: None,
        }),
    ))
}

/// Return every message of a thread
pub async fn get_all_messages(
    State(threads): State<Arc<dyn ThreadStore>>,
    payload: Result<Json<GetMessagesRequest>, JsonRejection>,
) -> Result<Json<ThreadMessagesResponse>, ThreadApiError> {
    let Json(request) = payload?;
    let content_id = require_id("contentID", request.content_id, MISSING_CONTENT_ID)?;

    let thread = threads
        .fetch(&content_id)
        .await?
        .ok_or_else(|| BackendError::not_found("No messages found for this contentID"))?;

    Ok(Json(thread.into()))
}

/// Create an empty or seeded thread; fails if the id is taken
pub async fn create_thread(
    State(threads): State<Arc<dyn ThreadStore>>,
    payload: Result<Json<CreateThreadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ThreadStatusResponse>), ThreadApiError> {
    let Json(request) = payload?;
    let content_id = require_id("contentID", request.content_id, MISSING_CONTENT_ID)?;

    let seed = request
        .messages
        .unwrap_or_default()
        .into_iter()
        .map(seed_entry)
        .collect::<Result<Vec<_>, _>>()?;
    let seeded = seed.len();

    if !threads.create(&content_id, seed).await? {
        return Err(BackendError::already_exists("ContentID already exists").into());
    }
    tracing::info!("Created thread {} with {} seed messages", content_id, seeded);

    Ok((
        StatusCode::CREATED,
        Json(ThreadStatusResponse {
            message: "New content schema created successfully".to_string(),
            content_id: Some(content_id),
        }),
    ))
}

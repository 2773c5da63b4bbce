//! Contact HTTP Handlers
//!
//! - `POST /contacts/add` - mutual add
//! - `POST /contacts/remove` - single-sided remove
//! - `GET /contacts/{user_id}` - read a list

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::service::ContactGraph;
use crate::backend::error::BackendError;
use crate::shared::ids::require_id;
use crate::shared::messaging::{ContactAck, ContactPairRequest, ContactRecord};

const MISSING_IDS: &str = "Missing user IDs";

fn pair(request: ContactPairRequest) -> Result<(String, String), BackendError> {
    let user_a = require_id("userA", request.user_a, MISSING_IDS)?;
    let user_b = require_id("userB", request.user_b, MISSING_IDS)?;
    Ok((user_a, user_b))
}

/// Make two users contacts of each other
pub async fn add_contact(
    State(graph): State<ContactGraph>,
    payload: Result<Json<ContactPairRequest>, JsonRejection>,
) -> Result<Json<ContactAck>, BackendError> {
    let Json(request) = payload?;
    let (user_a, user_b) = pair(request)?;

    graph.add_mutual(&user_a, &user_b).await?;
    tracing::info!("Contacts linked: {} <-> {}", user_a, user_b);

    Ok(Json(ContactAck::ok()))
}

/// Remove `userB` from `userA`'s contacts
pub async fn remove_contact(
    State(graph): State<ContactGraph>,
    payload: Result<Json<ContactPairRequest>, JsonRejection>,
) -> Result<Json<ContactAck>, BackendError> {
    let Json(request) = payload?;
    let (user_a, user_b) = pair(request)?;

    let remaining = graph.remove(&user_a, &user_b).await?;
    tracing::info!("Contact {} removed from {}", user_b, user_a);

    Ok(Json(ContactAck::with_contacts(remaining)))
}

/// Get a user's contacts; unknown users have an empty list
pub async fn get_contacts(
    State(graph): State<ContactGraph>,
    Path(user_id): Path<String>,
) -> Result<Json<ContactRecord>, BackendError> {
    let record = graph.contacts_of(&user_id).await?;
    Ok(Json(record))
}

//! Contact graph service
//!
//! Adds are mutual, removes are single-sided: removing B from A's list leaves
//! A in B's list. Every write is a compare-and-swap against what was read, so
//! two requests touching the same owner cannot overwrite each other. A lost
//! race means another writer committed, so the loser re-reads and tries again
//! until its own write lands or the rule turns it into a no-op.

use std::sync::Arc;

use super::store::ContactStore;
use crate::backend::error::BackendError;
use crate::shared::{AddOutcome, ContactRecord, SharedError};

const MISSING_IDS: &str = "Missing user IDs";

/// Contact list operations over a [`ContactStore`]
#[derive(Clone)]
pub struct ContactGraph {
    store: Arc<dyn ContactStore>,
}

impl ContactGraph {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Make `user_a` and `user_b` contacts of each other
    ///
    /// Both directions run concurrently and independently. If one fails the
    /// other is not rolled back; the first failure (A's side first) is
    /// returned.
    #[tracing::instrument(skip(self))]
    pub async fn add_mutual(&self, user_a: &str, user_b: &str) -> Result<(), BackendError> {
        ensure_id("userA", user_a, MISSING_IDS)?;
        ensure_id("userB", user_b, MISSING_IDS)?;

        let (forward, backward) = tokio::join!(self.add(user_a, user_b), self.add(user_b, user_a));

        match (&forward, &backward) {
            (Ok(_), Err(err)) | (Err(err), Ok(_)) => {
                tracing::warn!("Mutual add only partly applied: {}", err);
            }
            _ => {}
        }

        forward?;
        backward?;
        Ok(())
    }

    /// Add `contact` to `owner`'s list, creating the list if needed
    pub async fn add(&self, owner: &str, contact: &str) -> Result<AddOutcome, BackendError> {
        loop {
            match self.store.load(owner).await? {
                None => {
                    if owner == contact {
                        return Ok(AddOutcome::SelfReference);
                    }
                    let record = ContactRecord::new(owner, contact);
                    if self.store.insert_if_absent(&record).await? {
                        tracing::debug!(owner, contact, "Created contact list");
                        return Ok(AddOutcome::Added);
                    }
                }
                Some(mut record) => {
                    let expected = record.contacts.clone();
                    let outcome = record.add(contact)?;
                    if !outcome.is_mutation() {
                        return Ok(outcome);
                    }
                    if self
                        .store
                        .compare_and_swap(owner, &expected, &record.contacts)
                        .await?
                    {
                        tracing::debug!(owner, contact, size = record.len(), "Added contact");
                        return Ok(outcome);
                    }
                }
            }
            tracing::debug!(owner, "Contact list changed underneath us, retrying");
        }
    }

    /// Remove `contact` from `owner`'s list and return what remains
    ///
    /// Only `owner`'s side changes. An owner without a list is `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, owner: &str, contact: &str) -> Result<Vec<String>, BackendError> {
        ensure_id("userA", owner, MISSING_IDS)?;
        ensure_id("userB", contact, MISSING_IDS)?;

        loop {
            let mut record = self
                .store
                .load(owner)
                .await?
                .ok_or_else(|| BackendError::not_found("User not found or fetch failed"))?;

            let expected = record.contacts.clone();
            if !record.remove(contact) {
                return Ok(record.contacts);
            }
            if self
                .store
                .compare_and_swap(owner, &expected, &record.contacts)
                .await?
            {
                tracing::debug!(owner, contact, size = record.len(), "Removed contact");
                return Ok(record.contacts);
            }
            tracing::debug!(owner, "Contact list changed underneath us, retrying");
        }
    }

    /// The owner's list, empty when none has been created
    pub async fn contacts_of(&self, owner: &str) -> Result<ContactRecord, BackendError> {
        ensure_id("userId", owner, "Missing user ID")?;
        Ok(self
            .store
            .load(owner)
            .await?
            .unwrap_or_else(|| ContactRecord::empty(owner)))
    }
}

fn ensure_id(field: &str, value: &str, message: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(())
}

//! Contact Record
//!
//! A user's contact list: the set of other user ids they may message.
//! The set is stored as an ordered sequence, but order carries no meaning
//! beyond being stable while the record is unchanged.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::ids::OpaqueId;

/// Maximum number of contacts a single owner may hold
pub const CONTACT_LIMIT: usize = 50;

/// Result of a single-direction add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The contact was appended
    Added,
    /// The contact was already present; nothing changed
    AlreadyPresent,
    /// The owner tried to add themselves; nothing changed
    SelfReference,
}

impl AddOutcome {
    pub fn is_mutation(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// One owner's contact set
///
/// Invariants: the owner is never in `contacts`, entries are unique, and
/// there are at most [`CONTACT_LIMIT`] of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// The user this list belongs to
    pub owner: String,
    /// Contact ids, unique
    pub contacts: Vec<String>,
}

impl ContactRecord {
    /// Create a record holding a single contact
    pub fn new(owner: impl Into<String>, first_contact: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            contacts: vec![first_contact.into()],
        }
    }

    /// Record with no contacts, used as the read default for unknown owners
    pub fn empty(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            contacts: Vec::new(),
        }
    }

    pub fn contains(&self, contact: &str) -> bool {
        self.contacts.iter().any(|c| c == contact)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contacts.len() >= CONTACT_LIMIT
    }

    /// Apply the single-direction add rule
    ///
    /// Present contacts and self-references are accepted without change. A
    /// full set rejects new contacts and is left untouched.
    pub fn add(&mut self, contact: &str) -> Result<AddOutcome, SharedError> {
        if contact == self.owner {
            return Ok(AddOutcome::SelfReference);
        }
        if self.contains(contact) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        if self.is_full() {
            return Err(SharedError::capacity(&self.owner, CONTACT_LIMIT));
        }
        self.contacts.push(contact.to_string());
        Ok(AddOutcome::Added)
    }

    /// Drop `contact` if present, returning whether anything was removed
    pub fn remove(&mut self, contact: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c != contact);
        self.contacts.len() != before
    }
}

/// Body of `POST /contacts/add` and `POST /contacts/remove`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ContactPairRequest {
    #[serde(rename = "userA")]
    pub user_a: Option<OpaqueId>,
    #[serde(rename = "userB")]
    pub user_b: Option<OpaqueId>,
}

/// Acknowledgement returned by the contact mutation routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactAck {
    pub success: bool,
    /// The owner's set after a remove
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<String>>,
}

impl ContactAck {
    pub fn ok() -> Self {
        Self {
            success: true,
            contacts: None,
        }
    }

    pub fn with_contacts(contacts: Vec<String>) -> Self {
        Self {
            success: true,
            contacts: Some(contacts),
        }
    }
}

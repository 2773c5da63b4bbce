//! Contact store abstraction
//!
//! Stores expose whole-record reads plus two conditional writes. The service
//! re-reads and re-applies its rule whenever a conditional write loses a race.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::error::StoreError;
use crate::shared::ContactRecord;

/// Durable storage for contact records
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch the owner's record, if any
    async fn load(&self, owner: &str) -> Result<Option<ContactRecord>, StoreError>;

    /// Create the record unless one already exists for its owner.
    /// Returns `false` when another writer created it first.
    async fn insert_if_absent(&self, record: &ContactRecord) -> Result<bool, StoreError>;

    /// Replace the owner's contacts only if they still equal `expected`.
    /// Returns `false` when the stored set has changed since it was read.
    async fn compare_and_swap(
        &self,
        owner: &str,
        expected: &[String],
        contacts: &[String],
    ) -> Result<bool, StoreError>;

    /// Short name used in logs and the health report
    fn backend_name(&self) -> &'static str;
}

/// In-process contact store
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    records: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn load(&self, owner: &str) -> Result<Option<ContactRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(owner).map(|contacts| ContactRecord {
            owner: owner.to_string(),
            contacts: contacts.clone(),
        }))
    }

    async fn insert_if_absent(&self, record: &ContactRecord) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.owner) {
            return Ok(false);
        }
        records.insert(record.owner.clone(), record.contacts.clone());
        Ok(true)
    }

    async fn compare_and_swap(
        &self,
        owner: &str,
        expected: &[String],
        contacts: &[String],
    ) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(owner) {
            Some(current) if current.as_slice() == expected => {
                *current = contacts.to_vec();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

//! Message thread store abstraction
//!
//! Threads are append-only; nothing here edits or deletes an entry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::error::StoreError;
use crate::shared::messaging::{AppendOutcome, MessageThread, ThreadEntry};

/// Durable storage for message threads
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Append `entry`, creating the thread when it does not exist yet
    async fn append(&self, content_id: &str, entry: ThreadEntry) -> Result<AppendOutcome, StoreError>;

    /// Every entry of the thread in insertion order
    async fn fetch(&self, content_id: &str) -> Result<Option<MessageThread>, StoreError>;

    /// Create a thread seeded with `seed`. Returns `false` if it already exists.
    async fn create(&self, content_id: &str, seed: Vec<ThreadEntry>) -> Result<bool, StoreError>;

    fn backend_name(&self) -> &'static str;
}

/// In-process thread store
#[derive(Debug, Default)]
pub struct MemoryThreadStore {
    threads: RwLock<HashMap<String, Vec<ThreadEntry>>>,
}

impl MemoryThreadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThreadStore for MemoryThreadStore {
    async fn append(&self, content_id: &str, entry: ThreadEntry) -> Result<AppendOutcome, StoreError> {
        let mut threads = self.threads.write().await;
        match threads.get_mut(content_id) {
            Some(entries) => {
                entries.push(entry);
                Ok(AppendOutcome::Appended)
            }
            None => {
                threads.insert(content_id.to_string(), vec![entry]);
                Ok(AppendOutcome::Created)
            }
        }
    }

    async fn fetch(&self, content_id: &str) -> Result<Option<MessageThread>, StoreError> {
        let threads = self.threads.read().await;
        Ok(threads.get(content_id).map(|entries| MessageThread {
            content_id: content_id.to_string(),
            messages: entries.clone(),
        }))
    }

    async fn create(&self, content_id: &str, seed: Vec<ThreadEntry>) -> Result<bool, StoreError> {
        let mut threads = self.threads.write().await;
        if threads.contains_key(content_id) {
            return Ok(false);
        }
        threads.insert(content_id.to_string(), seed);
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

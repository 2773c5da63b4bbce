//! Message Threads Module
//!
//! Append-only message logs keyed by an opaque `contentID`.

pub mod db;
pub mod handlers;
pub mod store;

pub use db::PgThreadStore;
pub use handlers::{append_message, create_thread, get_all_messages};
pub use store::{MemoryThreadStore, ThreadStore};

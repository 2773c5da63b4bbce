//! Contacts Module
//!
//! Per-user contact lists: mutual add, single-sided remove, and a cap of
//! [`CONTACT_LIMIT`](crate::shared::CONTACT_LIMIT) entries per owner.
//!
//! # Module Structure
//!
//! ```text
//! contacts/
//! ├── mod.rs       - Module exports
//! ├── store.rs     - ContactStore trait and in-process store
//! ├── db.rs        - PostgreSQL store
//! ├── service.rs   - ContactGraph (add/remove/list rules)
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod service;
pub mod store;

pub use db::PgContactStore;
pub use handlers::{add_contact, get_contacts, remove_contact};
pub use service::ContactGraph;
pub use store::{ContactStore, MemoryContactStore};

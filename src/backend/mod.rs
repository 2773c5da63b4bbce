//! Backend Module
//!
//! All server-side code. Only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - router assembly, CORS, tracing, health check
//! - **`contacts`** - contact graph service, stores and handlers
//! - **`threads`** - message thread stores and handlers
//! - **`auth`** - identity providers, user store, session tokens, handlers
//! - **`middleware`** - the `CurrentUser` bearer-token extractor
//! - **`error`** - `StoreError`, `BackendError` and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── contacts/       - Contact lists
//! ├── threads/        - Message threads
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Storage
//!
//! Every store is a trait with a PostgreSQL implementation (sqlx, embedded
//! migrations) and an in-process one (`tokio::sync::RwLock<HashMap<..>>`).
//! `server::init` picks one family depending on whether `DATABASE_URL` is set.
//!
//! # Error Handling
//!
//! Contact and auth routes answer errors with `{ "error", "status" }`;
//! message thread routes keep `{ "success": false, "message" }`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Contact lists
pub mod contacts;

/// Message threads
pub mod threads;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;

//! Biszbo - Contacts, Message Threads and Accounts Backend
//!
//! Biszbo is a small HTTP backend for a private-messaging client. It keeps
//! per-user contact lists, append-only message threads and email/password
//! accounts, persisted in PostgreSQL or in process memory.
//!
//! # Overview
//!
//! This library provides:
//! - Contact graph maintenance (mutual add, single-sided remove, 50-contact cap)
//! - Message thread storage keyed by an opaque `contentID`
//! - Authentication through a pluggable identity provider (local or remote)
//! - An Axum router with a configurable CORS origin list
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and domain rules with no server dependencies
//!   - Contact records and their invariants
//!   - Message thread entries
//!   - Identity request/response types
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server, routing and CORS
//!   - Contact graph service and its stores
//!   - Message thread stores
//!   - Identity providers and the authenticated-user extractor
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use biszbo::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, _state) = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All backend state is shared through `Arc` and trait objects that are
//! `Send + Sync`. In-process stores guard their maps with `tokio::sync::RwLock`.
//! Contact updates use compare-and-swap on the store, so concurrent writers to
//! the same owner never lose an addition.
//!
//! # Error Handling
//!
//! - `shared::SharedError` for domain-rule failures (validation, capacity)
//! - `backend::error::StoreError` for persistence failures
//! - `backend::auth::IdentityError` for authentication failures
//! - `backend::error::BackendError` aggregates them into HTTP responses

/// Shared types and domain rules
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

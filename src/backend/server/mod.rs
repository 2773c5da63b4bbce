//! Server Module
//!
//! - **`config`** - `ServerConfig`, its builder and environment loading
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - builds stores and the identity provider, then the router
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env()` after `.env` is loaded
//! 2. **Storage**: PostgreSQL pool plus migrations, or in-process stores
//! 3. **Identity**: local (bcrypt + JWT) or remote provider
//! 4. **Router**: API routes, health check, CORS and tracing layers

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, IdentityConfig, ServerConfig};
pub use init::create_app;
pub use state::AppState;

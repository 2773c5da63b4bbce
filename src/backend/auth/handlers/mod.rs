//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /register - create an account
//! - **`login`** - POST /login - open a session
//! - **`get_me`** - GET /me - resolve the bearer token to a user id
//!
//! All three go through the `IdentityProvider` held in application state,
//! so they behave the same with the local and the remote provider.

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;

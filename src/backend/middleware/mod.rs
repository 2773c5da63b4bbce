//! Middleware Module
//!
//! Request extractors shared by the route handlers.
//!
//! - **`auth`** - `CurrentUser`, the bearer-token extractor for protected routes

pub mod auth;

pub use auth::{bearer_token, CurrentUser};

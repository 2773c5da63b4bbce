//! Route Configuration Module
//!
//! - **`router`** - router assembly, CORS and tracing layers
//! - **`api_routes`** - contact, message thread and auth endpoints
//! - **`health`** - `GET /health`

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Health check handler
pub mod health;

pub use router::{cors_layer, create_router};

//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A router built on in-process stores
//! - Authentication helpers that go through the HTTP API
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
#[cfg(feature = "ssr")]
pub mod app;
#[cfg(feature = "ssr")]
pub mod auth_helpers;

#[cfg(feature = "ssr")]
pub use app::*;
#[cfg(feature = "ssr")]
pub use auth_helpers::*;

//! API integration tests
//!
//! Integration tests for all API endpoints

mod contacts_test;
mod health_test;
mod messages_test;

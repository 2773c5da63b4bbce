//! Property-based tests

mod contact_proptest;

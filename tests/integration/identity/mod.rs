//! Identity provider integration tests

mod remote_identity_test;

//! Integration tests module
//!
//! Contains tests that require a database and test the full API.

mod common;

mod health_test;
mod quota_test;

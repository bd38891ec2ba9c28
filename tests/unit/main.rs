//! Unit tests module
//!
//! Contains tests for individual components in isolation.

mod freshness_test;
mod resolver_test;

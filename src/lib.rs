//! YouRoute Server Library
//!
//! This module exposes the server components for testing purposes.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod watcher;
pub mod youtube;

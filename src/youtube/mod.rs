//! YouTube Data API access.
//!
//! The rest of the service talks to YouTube through the [`YouTubeApi`]
//! trait so tests can swap in a mock; the real implementation lives in
//! [`client::YouTubeClient`].

pub mod client;

use async_trait::async_trait;

use crate::error::AppResult;

pub use client::YouTubeClient;

/// The two search shapes the service needs from the Data API.
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// Searches channels by handle or custom name and returns the first
    /// result's channel id, if any.
    async fn search_channel(&self, query: &str) -> AppResult<Option<String>>;

    /// True if the channel has a live broadcast running right now.
    async fn has_live_stream(&self, channel_id: &str) -> AppResult<bool>;
}

//! Reqwest-backed YouTube Data API v3 client.
//!
//! Issues the two `search` query shapes the service uses: `type=channel`
//! for name resolution and `type=video&eventType=live` for liveness. Both
//! authenticate with the API key as a query parameter.

use async_trait::async_trait;
use serde::Deserialize;

use super::YouTubeApi;
use crate::config::YouTubeConfig;
use crate::error::{AppError, AppResult};

/// Real Data API client
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Creates a client from the loaded configuration
    pub fn new(config: &YouTubeConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn search(&self, params: &[(&str, &str)]) -> AppResult<SearchResponse> {
        let url = format!("{}/search", self.base_url);
        let mut query: Vec<(&str, &str)> = vec![("part", "snippet"), ("key", &self.api_key)];
        query.extend_from_slice(params);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Upstream("search request timed out".to_string())
                } else {
                    AppError::Upstream(format!("search request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "search returned HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid search response: {}", e)))
    }
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    async fn search_channel(&self, query: &str) -> AppResult<Option<String>> {
        let response = self
            .search(&[("q", query), ("type", "channel")])
            .await?;

        // Explicit parse: a result without a snippet or channelId is
        // treated as no result, not a fault.
        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.snippet)
            .and_then(|snippet| snippet.channel_id))
    }

    async fn has_live_stream(&self, channel_id: &str) -> AppResult<bool> {
        let response = self
            .search(&[
                ("channelId", channel_id),
                ("eventType", "live"),
                ("type", "video"),
            ])
            .await?;

        Ok(!response.items.is_empty())
    }
}

/// Minimal slice of the Data API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(rename = "channelId")]
    channel_id: Option<String>,
}

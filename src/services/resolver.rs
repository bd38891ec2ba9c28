//! Channel identity resolution.
//!
//! Maps a loosely-formatted YouTube URL to a stable channel id. Direct
//! `/channel/<id>` URLs resolve without a network call; handles (`/@name`)
//! and custom names fall back to a channel search. Every extraction or
//! search failure folds into "not found" rather than a fault; the HTTP
//! layer reports that as an invalid YouTube URL.

use crate::error::AppResult;
use crate::youtube::YouTubeApi;

/// The three URL shapes the resolver understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    /// `/channel/<id>`: already a stable channel id
    Direct(String),
    /// `/@<handle>`: needs a name search
    Handle(String),
    /// any other `youtube.com/<name>` path: needs a name search
    CustomName(String),
}

/// Cuts `s` at the first path/query/fragment delimiter.
fn until_delimiter(s: &str) -> &str {
    s.split(['/', '?', '#']).next().unwrap_or("")
}

/// Extracts the channel reference from a candidate URL. First match wins;
/// malformed input yields `None`, never an error.
pub fn parse_channel_ref(url: &str) -> Option<ChannelRef> {
    if let Some(rest) = url.split_once("/channel/").map(|(_, r)| r) {
        let id = until_delimiter(rest);
        if !id.is_empty() {
            return Some(ChannelRef::Direct(id.to_string()));
        }
        return None;
    }

    if let Some(rest) = url.split_once("/@").map(|(_, r)| r) {
        let handle = until_delimiter(rest);
        if !handle.is_empty() {
            return Some(ChannelRef::Handle(handle.to_string()));
        }
        return None;
    }

    if let Some(rest) = url.split_once("youtube.com/").map(|(_, r)| r) {
        let name = until_delimiter(rest);
        if !name.is_empty() {
            return Some(ChannelRef::CustomName(name.to_string()));
        }
    }

    None
}

/// Resolves a candidate URL to a channel id.
///
/// Returns `Ok(None)` when the URL has no recognizable shape, the search
/// comes back empty, or the search itself fails. Resolution failures are
/// a 404 for the caller, not a 500.
pub async fn resolve_channel_id(api: &dyn YouTubeApi, url: &str) -> AppResult<Option<String>> {
    let query = match parse_channel_ref(url) {
        Some(ChannelRef::Direct(id)) => return Ok(Some(id)),
        Some(ChannelRef::Handle(handle)) => handle,
        Some(ChannelRef::CustomName(name)) => name,
        None => return Ok(None),
    };

    match api.search_channel(&query).await {
        Ok(channel_id) => Ok(channel_id),
        Err(e) => {
            log::warn!("Channel search for {:?} failed: {}", query, e);
            Ok(None)
        }
    }
}

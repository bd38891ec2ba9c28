use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cached link between a Twitch username and a YouTube channel.
///
/// Rows are written wholesale on every refresh: either a username has no row
/// at all or a fully populated one. `last_checked` only advances after a
/// successful resolve+live-check cycle.
#[derive(Debug, Clone, FromRow)]
pub struct StreamerLink {
    pub twitch: String,
    pub youtube_url: String,
    pub channel_id: String,
    pub is_live: bool,
    pub verified: bool,
    pub last_checked: DateTime<Utc>,
}

impl StreamerLink {
    /// True while the record is younger than the configured TTL.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl_hours: i64) -> bool {
        now - self.last_checked < Duration::hours(ttl_hours)
    }

    /// Converts to the wire response
    pub fn to_response(&self, cached: bool) -> CheckResponse {
        CheckResponse {
            twitch: self.twitch.clone(),
            youtube_url: self.youtube_url.clone(),
            is_live: self.is_live,
            channel_id: self.channel_id.clone(),
            cached,
        }
    }
}

/// Response body of the check endpoint. Also deserializable because the
/// watcher consumes it on the other end of the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub twitch: String,
    pub youtube_url: String,
    pub is_live: bool,
    pub channel_id: String,
    pub cached: bool,
}

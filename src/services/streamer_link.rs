use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::StreamerLink;

pub struct StreamerLinkService;

impl StreamerLinkService {
    /// Fetches the cached link for a Twitch username, if one exists.
    /// Freshness is the caller's concern (`StreamerLink::is_fresh`).
    pub async fn get(pool: &PgPool, twitch: &str) -> AppResult<Option<StreamerLink>> {
        let link = sqlx::query_as::<_, StreamerLink>(
            r#"
            SELECT twitch, youtube_url, channel_id, is_live, verified, last_checked
            FROM streamer_links
            WHERE twitch = $1
            "#,
        )
        .bind(twitch)
        .fetch_optional(pool)
        .await?;

        Ok(link)
    }

    /// Writes a freshly resolved link, replacing every column of any
    /// existing row. Records are never merged field-by-field; last writer
    /// wins, which at worst costs a redundant API call.
    pub async fn upsert(
        pool: &PgPool,
        twitch: &str,
        youtube_url: &str,
        channel_id: &str,
        is_live: bool,
        checked_at: DateTime<Utc>,
    ) -> AppResult<StreamerLink> {
        let link = sqlx::query_as::<_, StreamerLink>(
            r#"
            INSERT INTO streamer_links (twitch, youtube_url, channel_id, is_live, verified, last_checked)
            VALUES ($1, $2, $3, $4, TRUE, $5)
            ON CONFLICT (twitch) DO UPDATE SET
                youtube_url = EXCLUDED.youtube_url,
                channel_id = EXCLUDED.channel_id,
                is_live = EXCLUDED.is_live,
                verified = EXCLUDED.verified,
                last_checked = EXCLUDED.last_checked
            RETURNING twitch, youtube_url, channel_id, is_live, verified, last_checked
            "#,
        )
        .bind(twitch)
        .bind(youtube_url)
        .bind(channel_id)
        .bind(is_live)
        .bind(checked_at)
        .fetch_one(pool)
        .await?;

        Ok(link)
    }
}

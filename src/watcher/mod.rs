//! Page-watcher decision logic.
//!
//! The watcher runs on a Twitch channel page: it detects the current
//! username, picks the most promising YouTube link out of the page, and
//! decides whether to show a banner from local cache, call the lookup
//! service, or do nothing. Everything environment-shaped is injected:
//! persistent state goes through a [`KeyValueStore`] and per-tab state
//! lives in an explicit [`WatcherSession`], so the logic is testable
//! without a browser. DOM scanning and banner rendering stay with the
//! embedder.
//!
//! The local daily cap and seven-day cache here are advisory duplicates
//! of the server's own policy; they cut call volume, they don't enforce
//! anything.

pub mod links;
pub mod state;
pub mod storage;

use chrono::{DateTime, Utc};

use crate::models::CheckResponse;

pub use links::{extract_subject, normalize_link, pick_best_link};
pub use state::{CachedLink, WatcherSession};
pub use storage::{KeyValueStore, MemoryStore};

/// Advisory client-side limits, configured independently of the server
#[derive(Debug, Clone)]
pub struct WatcherLimits {
    /// Max lookup calls per calendar day
    pub daily_limit: i64,
    /// Days a local cache entry stays fresh
    pub cache_days: i64,
}

impl Default for WatcherLimits {
    fn default() -> Self {
        Self {
            daily_limit: 10,
            cache_days: 7,
        }
    }
}

/// What a poll decided to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollPlan {
    /// Nothing to do this round
    Skip(SkipReason),
    /// A fresh cache entry says the streamer is live on YouTube
    ShowBanner { youtube_url: String },
    /// Call the lookup service with these two strings
    CallService { subject: String, yt_url: String },
}

/// Why a poll did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The user switched the extension off
    Disabled,
    /// The path is not a single-segment channel page
    NotAChannelPage,
    /// Same channel as the previous poll
    SameSubject,
    /// Local daily call cap reached
    DailyCapReached,
    /// Fresh cache entry, streamer not live
    CachedNotLive,
    /// No YouTube links found on the page
    NoLinks,
}

/// Decides what this poll should do.
///
/// `path` is the page path (e.g. `/somestreamer`), `links` the YouTube
/// anchor targets found on the page. The session remembers the last seen
/// subject so an unchanged page is a no-op; it is updated as soon as a new
/// subject is detected, even if a later step skips.
///
/// Steps run in a fixed order: enabled toggle, subject change, daily cap,
/// local cache, link selection. The cap is checked before the cache, so an
/// exhausted day shows no banner even for cached-live subjects.
pub fn plan_poll(
    session: &mut WatcherSession,
    store: &dyn KeyValueStore,
    limits: &WatcherLimits,
    path: &str,
    links: &[String],
    now: DateTime<Utc>,
) -> PollPlan {
    if !state::enabled(store) {
        return PollPlan::Skip(SkipReason::Disabled);
    }

    let subject = match extract_subject(path) {
        Some(subject) => subject,
        None => return PollPlan::Skip(SkipReason::NotAChannelPage),
    };
    if session.last_subject.as_deref() == Some(subject.as_str()) {
        return PollPlan::Skip(SkipReason::SameSubject);
    }
    session.last_subject = Some(subject.clone());

    let today = now.format("%Y-%m-%d").to_string();
    if state::usage_for(store, &today) >= limits.daily_limit {
        return PollPlan::Skip(SkipReason::DailyCapReached);
    }

    if let Some(cached) = state::read_cache(store).get(&subject) {
        if now - cached.last_checked < chrono::Duration::days(limits.cache_days) {
            return if cached.is_live {
                PollPlan::ShowBanner {
                    youtube_url: cached.youtube_url.clone(),
                }
            } else {
                PollPlan::Skip(SkipReason::CachedNotLive)
            };
        }
    }

    match pick_best_link(links, &subject) {
        Some(link) => PollPlan::CallService {
            subject,
            yt_url: normalize_link(link),
        },
        None => PollPlan::Skip(SkipReason::NoLinks),
    }
}

/// Records a lookup service response: bumps today's usage counter and
/// overwrites the subject's cache entry wholesale.
///
/// Returns whether the embedder should show the banner now.
pub fn record_response(
    store: &dyn KeyValueStore,
    response: &CheckResponse,
    now: DateTime<Utc>,
) -> bool {
    let today = now.format("%Y-%m-%d").to_string();
    state::increment_usage(store, &today);

    state::upsert_cache_entry(
        store,
        &response.twitch,
        CachedLink {
            youtube_url: response.youtube_url.clone(),
            is_live: response.is_live,
            channel_id: response.channel_id.clone(),
            last_checked: now,
        },
    );

    response.is_live
}

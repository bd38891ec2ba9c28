//! Persisted and per-tab watcher state.
//!
//! Two JSON maps live in the injected store: `youroute-cache` (subject →
//! cached link) and `youroute-usage` (day string → call count), plus the
//! `enabled` toggle the popup writes. Corrupt or missing values read as
//! empty; the watcher then just re-resolves.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;

pub const CACHE_KEY: &str = "youroute-cache";
pub const USAGE_KEY: &str = "youroute-usage";
pub const ENABLED_KEY: &str = "enabled";

/// Per-tab session state. The embedder owns one per page; there is no
/// module-level "last seen channel" anywhere.
#[derive(Debug, Default, Clone)]
pub struct WatcherSession {
    pub last_subject: Option<String>,
}

/// One local cache entry, keyed by subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedLink {
    pub youtube_url: String,
    pub is_live: bool,
    pub channel_id: String,
    pub last_checked: DateTime<Utc>,
}

/// The extension is on unless the toggle was explicitly switched off.
pub fn enabled(store: &dyn KeyValueStore) -> bool {
    store.get(ENABLED_KEY).as_deref() != Some("false")
}

/// Reads the subject cache; anything unreadable counts as empty.
pub fn read_cache(store: &dyn KeyValueStore) -> HashMap<String, CachedLink> {
    store
        .get(CACHE_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Overwrites one subject's cache entry, keeping the rest of the map.
pub fn upsert_cache_entry(store: &dyn KeyValueStore, subject: &str, entry: CachedLink) {
    let mut cache = read_cache(store);
    cache.insert(subject.to_string(), entry);
    if let Ok(raw) = serde_json::to_string(&cache) {
        store.set(CACHE_KEY, raw);
    }
}

fn read_usage(store: &dyn KeyValueStore) -> HashMap<String, i64> {
    store
        .get(USAGE_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Calls recorded for the given day string.
pub fn usage_for(store: &dyn KeyValueStore, day: &str) -> i64 {
    read_usage(store).get(day).copied().unwrap_or(0)
}

/// Bumps the given day's counter by one.
pub fn increment_usage(store: &dyn KeyValueStore, day: &str) {
    let mut usage = read_usage(store);
    *usage.entry(day.to_string()).or_insert(0) += 1;
    if let Ok(raw) = serde_json::to_string(&usage) {
        store.set(USAGE_KEY, raw);
    }
}

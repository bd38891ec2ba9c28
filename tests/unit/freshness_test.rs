//! Unit tests for cache freshness windows.

use chrono::{Duration, Utc};

use youroute::models::StreamerLink;

fn link_checked_days_ago(days: i64) -> StreamerLink {
    StreamerLink {
        twitch: "somestreamer".to_string(),
        youtube_url: "https://youtube.com/@somestreamer".to_string(),
        channel_id: "UCabc".to_string(),
        is_live: false,
        verified: true,
        last_checked: Utc::now() - Duration::days(days),
    }
}

#[test]
fn six_day_old_record_is_fresh_under_a_week_ttl() {
    let link = link_checked_days_ago(6);
    assert!(link.is_fresh(Utc::now(), 168));
}

#[test]
fn eight_day_old_record_is_stale_under_a_week_ttl() {
    let link = link_checked_days_ago(8);
    assert!(!link.is_fresh(Utc::now(), 168));
}

#[test]
fn ttl_boundary_is_exclusive() {
    let now = Utc::now();
    let link = StreamerLink {
        last_checked: now - Duration::hours(168),
        ..link_checked_days_ago(0)
    };
    assert!(!link.is_fresh(now, 168));
}

#[test]
fn shorter_ttl_applies() {
    let link = link_checked_days_ago(2);
    assert!(!link.is_fresh(Utc::now(), 24));
    assert!(link.is_fresh(Utc::now(), 72));
}

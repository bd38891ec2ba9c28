//! Integration tests for the per-IP daily quota.
//!
//! The admission transaction must hold up under concurrent callers and
//! roll a stale day over lazily.

use chrono::{Duration, Utc};
use futures_util::future::join_all;

use youroute::services::{Admission, QuotaService};

use crate::common::TestDb;

async fn counter_for(pool: &sqlx::PgPool, caller: &str) -> (String, i64) {
    sqlx::query_as("SELECT day, count FROM ip_usage WHERE caller_key = $1")
        .bind(caller)
        .fetch_one(pool)
        .await
        .expect("counter row should exist")
}

#[tokio::test]
async fn admits_up_to_the_limit_and_rejects_after() {
    let db = TestDb::new().await;

    for i in 0..10 {
        let admission = QuotaService::admit(&db.pool, "203.0.113.7", 10)
            .await
            .unwrap();
        assert_eq!(admission, Admission::Admitted, "call {} should pass", i);
    }

    let admission = QuotaService::admit(&db.pool, "203.0.113.7", 10)
        .await
        .unwrap();
    assert_eq!(admission, Admission::Rejected);

    // The rejected attempt must not have touched the counter.
    let (_, count) = counter_for(&db.pool, "203.0.113.7").await;
    assert_eq!(count, 10);
}

#[tokio::test]
async fn concurrent_storm_admits_exactly_the_limit() {
    let db = TestDb::new().await;
    let limit = 10;
    let n = 15;

    let admissions = join_all(
        (0..n).map(|_| QuotaService::admit(&db.pool, "198.51.100.4", limit)),
    )
    .await;

    let admitted = admissions
        .iter()
        .filter(|r| matches!(r, Ok(Admission::Admitted)))
        .count();
    let rejected = admissions
        .iter()
        .filter(|r| matches!(r, Ok(Admission::Rejected)))
        .count();

    assert_eq!(admitted, limit as usize);
    assert_eq!(rejected, n - limit as usize);

    let (_, count) = counter_for(&db.pool, "198.51.100.4").await;
    assert_eq!(count, limit);
}

#[tokio::test]
async fn counter_from_yesterday_counts_as_zero() {
    let db = TestDb::new().await;
    let yesterday = (Utc::now() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();

    // A stale row at (or far beyond) the limit must not block today.
    sqlx::query("INSERT INTO ip_usage (caller_key, day, count) VALUES ($1, $2, 99)")
        .bind("192.0.2.1")
        .bind(&yesterday)
        .execute(&db.pool)
        .await
        .unwrap();

    let admission = QuotaService::admit(&db.pool, "192.0.2.1", 10).await.unwrap();
    assert_eq!(admission, Admission::Admitted);

    let (day, count) = counter_for(&db.pool, "192.0.2.1").await;
    assert_eq!(day, Utc::now().format("%Y-%m-%d").to_string());
    assert_eq!(count, 1);
}

#[tokio::test]
async fn callers_are_throttled_independently() {
    let db = TestDb::new().await;

    for _ in 0..3 {
        QuotaService::admit(&db.pool, "203.0.113.1", 3).await.unwrap();
    }
    assert_eq!(
        QuotaService::admit(&db.pool, "203.0.113.1", 3).await.unwrap(),
        Admission::Rejected
    );

    // A different caller still has full headroom.
    assert_eq!(
        QuotaService::admit(&db.pool, "203.0.113.2", 3).await.unwrap(),
        Admission::Admitted
    );
}

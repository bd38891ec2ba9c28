use chrono::Utc;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::IpUsage;

/// Outcome of a quota admission attempt
#[derive(Debug, PartialEq, Eq)]
pub enum Admission {
    /// The call may proceed; the counter was incremented.
    Admitted,
    /// The caller hit the daily limit; the counter was left untouched.
    Rejected,
}

pub struct QuotaService;

impl QuotaService {
    /// Admits or rejects one call for `caller_key` against the daily limit.
    ///
    /// The read-rollover-compare-increment sequence runs inside a single
    /// transaction with the counter row locked, so concurrent admissions
    /// for the same caller serialize: with N concurrent calls and limit L,
    /// exactly min(N, L) are admitted and the counter ends at min(N, L).
    ///
    /// Days are compared as opaque `YYYY-MM-DD` strings in the service
    /// clock (UTC). A row carrying yesterday's date counts as zero; the
    /// reset happens inside the same transaction as the increment, there
    /// is no scheduled rollover job.
    pub async fn admit(pool: &PgPool, caller_key: &str, limit: i64) -> AppResult<Admission> {
        let today = Utc::now().format("%Y-%m-%d").to_string();

        let mut tx = pool.begin().await?;

        // Materialize the row so the FOR UPDATE below always has something
        // to lock. ON CONFLICT waits out a concurrent first insert.
        sqlx::query(
            "INSERT INTO ip_usage (caller_key, day, count) VALUES ($1, $2, 0)
             ON CONFLICT (caller_key) DO NOTHING",
        )
        .bind(caller_key)
        .bind(&today)
        .execute(&mut *tx)
        .await?;

        let usage = sqlx::query_as::<_, IpUsage>(
            "SELECT caller_key, day, count FROM ip_usage WHERE caller_key = $1 FOR UPDATE",
        )
        .bind(caller_key)
        .fetch_one(&mut *tx)
        .await?;

        // Lazy rollover: a stale day means the counter restarts at zero.
        let effective = if usage.day == today { usage.count } else { 0 };

        if effective >= limit {
            tx.rollback().await?;
            return Ok(Admission::Rejected);
        }

        sqlx::query("UPDATE ip_usage SET day = $2, count = $3 WHERE caller_key = $1")
            .bind(caller_key)
            .bind(&today)
            .bind(effective + 1)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Admission::Admitted)
    }
}

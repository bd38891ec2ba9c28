use sqlx::FromRow;

/// Per-caller daily usage counter.
///
/// `day` is an opaque `YYYY-MM-DD` string in the service clock; a row whose
/// day no longer matches today counts as zero (lazy rollover, no reset job).
#[derive(Debug, Clone, FromRow)]
pub struct IpUsage {
    pub caller_key: String,
    pub day: String,
    pub count: i64,
}

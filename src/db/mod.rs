use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::config::DatabaseConfig;

/// Type alias for the PostgreSQL connection pool
pub type DbPool = PgPool;

/// Summary of the schema migration state, as reported by the readiness probe.
#[derive(Debug, Clone, Copy)]
pub struct MigrationState {
    pub applied: i64,
    pub dirty: bool,
}

/// Creates a connection pool for the streamer-link store
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    log::info!("Connecting to streamer-link store...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(Some(config.idle_timeout))
        .max_lifetime(Some(config.max_lifetime))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                // Quota day strings are computed in the service clock (UTC);
                // keep every connection on the same clock.
                sqlx::query("SET timezone = 'UTC'").execute(conn).await?;
                Ok(())
            })
        })
        .connect(&config.url)
        .await?;

    log::info!(
        "Streamer-link store pool established (max: {}, min: {})",
        config.max_connections,
        config.min_connections
    );

    Ok(pool)
}

/// Applies any pending schema migrations
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    log::info!("Applying schema migrations...");

    sqlx::migrate!("./migrations").run(pool).await?;

    log::info!("Schema migrations up to date");
    Ok(())
}

/// Performs a health check on the database connection
pub async fn health_check(pool: &DbPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}

/// Reports how many migrations sqlx has applied and whether any of them
/// finished unsuccessfully. Returns None when the bookkeeping table is
/// missing, which means `run_migrations` never ran against this database.
pub async fn migration_state(pool: &DbPool) -> Option<MigrationState> {
    let row = sqlx::query(
        "SELECT COUNT(*) AS applied, \
                COUNT(*) FILTER (WHERE NOT success) AS failed \
         FROM _sqlx_migrations",
    )
    .fetch_one(pool)
    .await
    .ok()?;

    let applied: i64 = row.try_get("applied").ok()?;
    let failed: i64 = row.try_get("failed").ok()?;

    Some(MigrationState {
        applied,
        dirty: failed > 0,
    })
}

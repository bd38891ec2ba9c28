use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Serialize;

use crate::db::{self, DbPool};

#[derive(Serialize)]
pub struct LivenessResponse {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: &'static str,
    checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    database: &'static str,
    migrations: &'static str,
    migrations_applied: i64,
}

/// Liveness check - is the process running?
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(LivenessResponse { status: "ok" })
}

/// Readiness check - can the service reach its store, and is the schema
/// in place? A reachable database with zero applied migrations has no
/// streamer_links or ip_usage tables, so lookups would fail; report
/// not_ready until the schema exists. Returns 200 when ready, 503 otherwise.
pub async fn readiness(pool: web::Data<DbPool>) -> HttpResponse {
    let db_healthy = db::health_check(pool.get_ref()).await;

    let migrations = if db_healthy {
        db::migration_state(pool.get_ref()).await
    } else {
        None
    };

    let (migrations_status, migrations_applied) = match migrations {
        Some(state) if !state.dirty && state.applied > 0 => ("ok", state.applied),
        Some(state) if state.dirty => ("dirty", state.applied),
        Some(state) => ("pending", state.applied),
        None => ("pending", 0),
    };

    let ready = db_healthy && migrations_status == "ok";
    let (status, http_status) = if ready {
        ("ready", StatusCode::OK)
    } else {
        ("not_ready", StatusCode::SERVICE_UNAVAILABLE)
    };

    HttpResponse::build(http_status).json(ReadinessResponse {
        status,
        checks: ReadinessChecks {
            database: if db_healthy { "ok" } else { "error" },
            migrations: migrations_status,
            migrations_applied,
        },
    })
}

/// Configures the health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(liveness))
            .route("/ready", web::get().to(readiness)),
    );
}

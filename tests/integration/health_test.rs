//! Integration tests for the health endpoints.

use actix_web::{test, web, App};
use serde_json::Value;

use youroute::routes;

use crate::common::TestDb;

#[actix_web::test]
async fn liveness_is_always_ok() {
    let app = test::init_service(App::new().configure(routes::health::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn readiness_reports_database_state() {
    let db = TestDb::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.pool.clone()))
            .configure(routes::health::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "ok");
    assert_eq!(body["checks"]["migrations"], "ok");
    assert!(body["checks"]["migrations_applied"].as_i64().unwrap() >= 1);
}

#[actix_web::test]
async fn readiness_is_not_ready_until_the_schema_exists() {
    let db = TestDb::unmigrated().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.pool.clone()))
            .configure(routes::health::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"], "ok");
    assert_eq!(body["checks"]["migrations"], "pending");
    assert_eq!(body["checks"]["migrations_applied"], 0);
}

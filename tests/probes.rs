mod common;

use axum::http::StatusCode;
use common::{router_with, send, InMemoryRepository, UnavailableRepository};
use std::sync::Arc;

#[tokio::test]
async fn health_and_version() {
    let app = router_with(Arc::new(InMemoryRepository::new()));
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "student-service");
}

#[tokio::test]
async fn ready_reflects_repository() {
    let app = router_with(Arc::new(InMemoryRepository::new()));
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let app = router_with(Arc::new(UnavailableRepository));
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

//! Integration tests for the liveness check.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_ping() {
    let app = TestApp::without_database("development");
    let response = app.get("/ping", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"code": 200, "data": {"status": "OK"}, "message": "pong"})
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::without_database("development");
    let response = app.get("/api/v2/anything", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

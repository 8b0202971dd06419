//! Integration tests for the operational endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_status() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/status", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redis"], true);
    assert_eq!(response.body["db"], true);
}

#[tokio::test]
async fn test_stats_track_counts() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/stats", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["users"], 0);
    assert_eq!(response.body["files"], 0);

    let token = app.register_and_login("a@b.com", "pw").await;
    app.request(
        "POST",
        "/files",
        Some(serde_json::json!({ "name": "docs", "type": "folder" })),
        Some(&token),
    )
    .await;

    let response = app.request("GET", "/stats", None, None).await;
    assert_eq!(response.body["users"], 1);
    assert_eq!(response.body["files"], 1);
}

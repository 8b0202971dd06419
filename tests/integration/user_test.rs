//! Integration tests for registration and profile.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({ "email": "a@b.com", "password": "pw" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "a@b.com");
    assert!(response.body["id"].is_i64());
    // The digest never appears in any response.
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("password_digest").is_none());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({ "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Missing email");

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({ "email": "a@b.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Missing password");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register("a@b.com", "pw").await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({ "email": "a@b.com", "password": "other" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Already exists");
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    let id = app.register("a@b.com", "pw").await;
    let token = app.login("a@b.com", "pw").await;

    let response = app.request("GET", "/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"].as_i64(), Some(id));
    assert_eq!(response.body["email"], "a@b.com");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Unauthorized");
}

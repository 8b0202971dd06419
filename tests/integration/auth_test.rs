//! Integration tests for the session lifecycle.

use axum::http::StatusCode;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_connect_issues_distinct_tokens() {
    let app = TestApp::new().await;
    app.register("a@b.com", "pw").await;

    let first = app.login("a@b.com", "pw").await;
    let second = app.login("a@b.com", "pw").await;

    // Concurrent sessions for the same account are independent.
    assert_ne!(first, second);

    let response = app.request("GET", "/users/me", None, Some(&first)).await;
    assert_eq!(response.status, StatusCode::OK);
    let response = app.request("GET", "/users/me", None, Some(&second)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_connect_wrong_password() {
    let app = TestApp::new().await;
    app.register("a@b.com", "pw").await;

    let credentials = BASE64.encode("a@b.com:wrong");
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/connect")
        .header("Authorization", format!("Basic {credentials}"))
        .body(axum::body::Body::empty())
        .unwrap();

    let response = {
        use tower::ServiceExt;
        app.router.clone().oneshot(request).await.unwrap()
    };

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_connect_without_header() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/connect", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Unauthorized");
}

#[tokio::test]
async fn test_disconnect_revokes_token() {
    let app = TestApp::new().await;
    let token = app.register_and_login("a@b.com", "pw").await;

    let response = app.request("GET", "/disconnect", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // The token no longer resolves.
    let response = app.request("GET", "/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // A second disconnect with the dead token is rejected at the gate.
    let response = app.request("GET", "/disconnect", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/users/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

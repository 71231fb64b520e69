// tests/support/helpers.rs
use std::sync::Arc;

use article_service::application::services::ApplicationServices;
use article_service::domain::article::ArticleStore;
use article_service::infrastructure::repositories::InMemoryArticleStore;
use article_service::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_test_state(store: Arc<dyn ArticleStore>) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(store)),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_store(Arc::new(InMemoryArticleStore::new()))
}

pub fn make_test_router_with_store(store: Arc<dyn ArticleStore>) -> axum::Router {
    build_router(build_test_state(store))
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through a clone of `app` and return status plus JSON body.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected json body")
    };
    (status, json)
}

/// Create one article through the HTTP surface and return its id.
pub async fn create_article(app: &axum::Router, user_id: i64, title: &str) -> i64 {
    let payload = serde_json::json!({
        "userID": user_id,
        "title": title,
        "body": format!("{title} body"),
    });
    let (status, json) = send(app, json_request(Method::POST, "/articles", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["articleID"].as_i64().expect("articleID in response")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

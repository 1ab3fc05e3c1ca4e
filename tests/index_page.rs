//! Integration test for the index page route

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use std::sync::Arc;
use studygate::config::Config;
use studygate::error::AppResult;
use studygate::handlers::{self, AppState};
use studygate::model::TextGenerator;
use tower::ServiceExt;

struct UnusedModel;

#[async_trait::async_trait]
impl TextGenerator for UnusedModel {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        panic!("index page must not call the model");
    }
}

fn create_app() -> axum::Router {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 8000

[model]
name = "gemini-2.0-flash"
api_key = "test-key"
"#;
    let config: Config = toml::from_str(toml).expect("should parse test config");
    handlers::router(AppState::new(config, Arc::new(UnusedModel)))
}

#[tokio::test]
async fn test_index_renders_html_with_csrf_cookie() {
    let app = create_app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .expect("should build request");

    let response = app.oneshot(request).await.expect("should get response");

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("should set content type")
        .to_str()
        .expect("ascii");
    assert!(content_type.starts_with("text/html"));

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("should set CSRF cookie")
        .to_str()
        .expect("ascii");
    assert!(cookie.starts_with("csrftoken="));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("should read body");
    let html = String::from_utf8(bytes.to_vec()).expect("UTF-8");
    assert!(html.contains("/api/chat/"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/unknown/")
        .body(Body::empty())
        .expect("should build request");

    let response = app.oneshot(request).await.expect("should get response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

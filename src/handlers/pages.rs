//! Index page handler
//!
//! Serves the static chat page and issues the CSRF cookie the client echoes
//! back on POST requests. No core logic lives here.

use axum::{
    http::header::SET_COOKIE,
    response::{Html, IntoResponse},
};
use uuid::Uuid;

/// Name of the CSRF cookie set on the index page response.
pub const CSRF_COOKIE: &str = "csrftoken";

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET / handler
pub async fn handler() -> impl IntoResponse {
    let token = Uuid::new_v4().simple().to_string();
    let cookie = format!("{CSRF_COOKIE}={token}; Path=/; SameSite=Lax");

    ([(SET_COOKIE, cookie)], Html(INDEX_HTML))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[tokio::test]
    async fn test_index_sets_csrf_cookie() {
        let response = handler().await.into_response();

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("should set cookie")
            .to_str()
            .expect("cookie should be ascii");

        assert!(cookie.starts_with("csrftoken="));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let response = handler().await.into_response();

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("should set content type")
            .to_str()
            .expect("content type should be ascii");

        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_csrf_tokens_are_unique() {
        let first = handler().await.into_response();
        let second = handler().await.into_response();

        let cookie = |r: &axum::response::Response| {
            r.headers()
                .get(header::SET_COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        assert_ne!(cookie(&first), cookie(&second));
    }
}

//! Error types for StudyGate
//!
//! All errors implement `IntoResponse` for Axum handlers. Client-facing
//! messages are fixed Russian UI strings; upstream failure detail is kept in
//! the error for server-side logging and never reaches the response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Generic message returned to the client when the upstream model call fails.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Ошибка обращения к модели";

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Upstream model call failed: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Detail stays server-side; the client only sees the generic message
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, UPSTREAM_ERROR_MESSAGE.to_string()),
            Self::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creates() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_request_error_creates() {
        let err = AppError::BadRequest("Пустое сообщение".to_string());
        assert_eq!(err.to_string(), "Invalid request: Пустое сообщение");
    }

    #[test]
    fn test_bad_request_response_status() {
        let err = AppError::BadRequest("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_response_status() {
        let err = AppError::Upstream("connection refused".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_upstream_response_hides_detail() {
        let err = AppError::Upstream("api key leaked-secret rejected".to_string());
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("should read body");
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).expect("should be JSON");
        assert_eq!(body["error"], UPSTREAM_ERROR_MESSAGE);
        assert!(!body.to_string().contains("leaked-secret"));
    }

    #[test]
    fn test_internal_error_response_status() {
        let err = AppError::Internal("unexpected state".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! HTTP request handlers for the StudyGate API

use crate::config::Config;
use crate::model::TextGenerator;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod chat;
pub mod pages;

/// Application state shared across all handlers
///
/// Holds configuration and the upstream model client. All fields are Arc'd
/// for cheap cloning across Axum handlers; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    model: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Create a new AppState from configuration and a model client
    pub fn new(config: Config, model: Arc<dyn TextGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            model,
        }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the upstream model client
    pub fn model(&self) -> &dyn TextGenerator {
        self.model.as_ref()
    }
}

/// Build the application router
///
/// Shared between main and integration tests so both exercise the same
/// routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handler))
        .route("/api/chat/", post(chat::handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use async_trait::async_trait;

    struct CannedModel;

    #[async_trait]
    impl TextGenerator for CannedModel {
        async fn generate(&self, _prompt: &str) -> AppResult<String> {
            Ok(r#"{"type":"chat","chat_reply":"ok"}"#.to_string())
        }
    }

    fn create_test_config() -> Config {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8000

[model]
name = "gemini-2.0-flash"
api_key = "test-key"
"#;
        toml::from_str(toml).expect("should parse test config")
    }

    #[test]
    fn test_appstate_new_creates_state() {
        let state = AppState::new(create_test_config(), Arc::new(CannedModel));
        assert_eq!(state.config().server.port, 8000);
        assert_eq!(state.config().model.name(), "gemini-2.0-flash");
    }

    #[test]
    fn test_appstate_is_clonable() {
        let state = AppState::new(create_test_config(), Arc::new(CannedModel));
        let state2 = state.clone();
        assert_eq!(state2.config().server.port, 8000);
    }

    #[test]
    fn test_router_builds() {
        let state = AppState::new(create_test_config(), Arc::new(CannedModel));
        let _app = router(state);
    }
}

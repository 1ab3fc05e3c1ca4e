//! Chat endpoint handler
//!
//! Handles POST /api/chat/: validates the client payload, composes the
//! upstream prompt, awaits the model call, and returns the normalized reply.

use crate::error::AppError;
use crate::handlers::AppState;
use crate::normalize;
use crate::prompt;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

/// 400 message when the request body is not valid JSON.
pub const CLIENT_JSON_ERROR: &str = "Ошибка чтения JSON от клиента";
/// 400 message when the message trims to empty.
pub const EMPTY_MESSAGE_ERROR: &str = "Пустое сообщение";

/// Chat request from the browser client
///
/// Both fields default to empty so a missing field behaves like a blank one;
/// emptiness of `message` is rejected by the handler before any model call.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    context: String,
}

impl ChatRequest {
    /// Get the trimmed message
    pub fn message(&self) -> &str {
        self.message.trim()
    }

    /// Get the trimmed study material
    pub fn context(&self) -> &str {
        self.context.trim()
    }
}

/// POST /api/chat/ handler
///
/// The request pipeline is strictly sequential: validate, compose, one
/// awaited upstream call, normalize. Upstream call failures map to a generic
/// 502; malformed model output never becomes an HTTP error because the
/// normalizer degrades it to a renderable chat payload.
pub async fn handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected client payload");
        AppError::BadRequest(CLIENT_JSON_ERROR.to_string())
    })?;

    if request.message().is_empty() {
        return Err(AppError::BadRequest(EMPTY_MESSAGE_ERROR.to_string()));
    }

    tracing::debug!(
        message_length = request.message().chars().count(),
        context_length = request.context().chars().count(),
        "Received chat request"
    );

    let composed = prompt::compose(request.message(), request.context());

    let raw_text = state.model().generate(&composed).await.inspect_err(|e| {
        tracing::error!(error = %e, "Model call failed");
    })?;

    let reply = normalize::normalize(&raw_text);

    tracing::debug!(raw_length = raw_text.chars().count(), "Normalized model reply");

    Ok(Json(reply))
}

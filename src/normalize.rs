//! Response normalization
//!
//! Turns the untrusted, possibly malformed text returned by the upstream
//! model into a well-typed payload the UI can always render. The pipeline is
//! total: fence stripping, JSON span extraction, parse, tag validation,
//! chat_reply backfill, per-tag shape validation. Every failure path resolves
//! to a `chat` variant; nothing here returns an error.

use crate::shared::text::truncate_chars;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// Reply when the model returned nothing at all.
pub const EMPTY_REPLY: &str = "Ответ пустой.";
/// Reply when the model used an unknown type tag.
pub const UNKNOWN_TYPE_REPLY: &str = "Не понял запрос. Сформулируй иначе.";
/// Backfill for a missing or blank chat_reply.
pub const DEFAULT_REPLY: &str = "Готово.";
/// Reply when a test payload did not carry a question list.
pub const TEST_SHAPE_REPLY: &str = "Не смог составить тест. Попробуй ещё раз.";
/// Reply when a document payload did not carry an HTML string.
pub const DOCUMENT_SHAPE_REPLY: &str = "Не смог сгенерировать документ. Попробуй ещё раз.";

/// Character cap on raw model text echoed back in the degraded chat variant.
const RAW_REPLY_LIMIT: usize = 2_000;
/// Character cap on the diagnostic sample logged for unparseable replies.
const LOG_SAMPLE_LIMIT: usize = 1_500;

/// One quiz question inside a `test` reply.
///
/// Fields default individually; the upstream contract only guarantees the
/// containing `content` is a list, so partially filled items pass through
/// rather than discarding the whole test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct: u32,
    #[serde(default)]
    pub why: String,
}

/// The normalized reply contract: exactly one of three shapes is ever
/// emitted, and `chat_reply` is always non-empty.
///
/// Serializes with a `type` tag; the `chat` variant carries `content: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reply {
    Test {
        content: Vec<QuizItem>,
        chat_reply: String,
    },
    Document {
        content: String,
        chat_reply: String,
    },
    Chat {
        content: (),
        chat_reply: String,
    },
}

impl Reply {
    /// The guaranteed base case of the contract.
    pub fn chat(reply: impl Into<String>) -> Self {
        Reply::Chat {
            content: (),
            chat_reply: reply.into(),
        }
    }

    /// Get the chat_reply carried by any variant
    pub fn chat_reply(&self) -> &str {
        match self {
            Reply::Test { chat_reply, .. }
            | Reply::Document { chat_reply, .. }
            | Reply::Chat { chat_reply, .. } => chat_reply,
        }
    }
}

fn fence_open_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"(?i)^```(?:json)?\s*").expect("valid regex"))
}

fn fence_close_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"\s*```$").expect("valid regex"))
}

fn json_span_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    // Greedy across newlines: first '{' to last '}' (or '[' to last ']').
    // Sibling fragments can be spanned together; known limitation.
    RE.get_or_init(|| regex::Regex::new(r"(?s)(\{.*\}|\[.*\])").expect("valid regex"))
}

/// Extract the JSON parse candidate from raw model text.
///
/// Strips a markdown fence (```/```json, case-insensitive) when the trimmed
/// text starts with one, then takes the first `{...}` or `[...]` span. Falls
/// back to the whole stripped text when no span is found. Pure function;
/// parsing happens in [`normalize`].
pub fn extract_json(text: &str) -> &str {
    let mut t = text.trim();

    if t.starts_with("```") {
        t = fence_open_re().find(t).map_or(t, |m| &t[m.end()..]).trim();
        t = fence_close_re()
            .find(t)
            .map_or(t, |m| &t[..m.start()])
            .trim();
    }

    match json_span_re().find(t) {
        Some(m) => m.as_str().trim(),
        None => t,
    }
}

/// Normalize raw model text into a valid [`Reply`].
///
/// Never fails outward: unparseable text degrades to a chat variant echoing
/// the (truncated) raw text, and parseable-but-malformed payloads are
/// replaced with fixed user-facing chat messages.
pub fn normalize(raw_text: &str) -> Reply {
    let raw = raw_text.trim();
    let candidate = extract_json(raw);

    let value: Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(_) => {
            tracing::error!(
                sample = truncate_chars(raw, LOG_SAMPLE_LIMIT),
                "Model returned invalid JSON"
            );
            // Degrade gracefully: show the raw text so the UI stays alive
            let reply = if raw.is_empty() {
                EMPTY_REPLY.to_string()
            } else {
                truncate_chars(raw, RAW_REPLY_LIMIT).to_string()
            };
            return Reply::chat(reply);
        }
    };

    from_value(value)
}

/// Validate a parsed payload against the three-variant contract.
///
/// Tried in order: tag check, chat_reply backfill, per-tag content shape.
/// Any violation substitutes the whole payload with a fixed chat message.
fn from_value(value: Value) -> Reply {
    let chat_reply = value
        .get("chat_reply")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_REPLY)
        .to_string();

    match value.get("type").and_then(Value::as_str) {
        Some("test") => match value.get("content") {
            Some(content @ Value::Array(_)) => {
                match serde_json::from_value::<Vec<QuizItem>>(content.clone()) {
                    Ok(content) => Reply::Test {
                        content,
                        chat_reply,
                    },
                    Err(_) => Reply::chat(TEST_SHAPE_REPLY),
                }
            }
            _ => Reply::chat(TEST_SHAPE_REPLY),
        },
        Some("document") => match value.get("content") {
            Some(Value::String(html)) => Reply::Document {
                content: html.clone(),
                chat_reply,
            },
            _ => Reply::chat(DOCUMENT_SHAPE_REPLY),
        },
        // The chat variant never carries structured content; whatever the
        // model put there is dropped in favor of null.
        Some("chat") => Reply::Chat {
            content: (),
            chat_reply,
        },
        _ => Reply::chat(UNKNOWN_TYPE_REPLY),
    }
}

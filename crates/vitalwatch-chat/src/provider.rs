use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChatError;

/// Substituted when a provider answers successfully but with no text.
pub const EMPTY_REPLY: &str = "I could not generate a response right now. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A successful remote answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub provider: ProviderKind,
}

/// One remote LLM behind a uniform question → reply contract.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Ask one question. `context_text` is the pre-rendered result block.
    async fn reply(&self, question: &str, context_text: &str) -> Result<String, ChatError>;
}

/// `error.message` from a provider's JSON error body, if present and non-empty.
pub fn api_error_message(body: &Value) -> Option<&str> {
    body.get("error")?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
}

/// Join trimmed, non-empty text fragments with newlines; empty input yields
/// [`EMPTY_REPLY`].
pub(crate) fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let text = fragments
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if text.is_empty() {
        EMPTY_REPLY.to_string()
    } else {
        text
    }
}

/// Read a provider response: JSON body on success, the provider's error
/// message (or `fallback`) otherwise.
pub(crate) async fn read_json(
    response: reqwest::Response,
    fallback: &str,
) -> Result<Value, ChatError> {
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| ChatError::ResponseParse(e.to_string()))?;

    if !status.is_success() {
        let message = api_error_message(&body).unwrap_or(fallback);
        return Err(ChatError::Invocation(message.to_string()));
    }
    Ok(body)
}

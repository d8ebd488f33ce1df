//! OpenAI Responses API adapter.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ChatError;
use crate::prompt::{SYSTEM_PROMPT, user_message};
use crate::provider::{ChatProvider, ProviderKind, join_fragments, read_json};

pub const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";
const FAILURE_MESSAGE: &str = "OpenAI API request failed.";

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: OPENAI_RESPONSES_URL.to_string(),
        }
    }

    /// Point at a different Responses-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

pub fn request_body(model: &str, question: &str, context_text: &str) -> Value {
    json!({
        "model": model,
        "input": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_message(question, context_text) },
        ],
    })
}

/// Prefer the top-level `output_text`; otherwise join every `output_text`
/// content part of every output item.
pub fn extract_reply(body: &Value) -> String {
    if let Some(text) = body.get("output_text").and_then(Value::as_str) {
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    let parts = body
        .get("output")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str));

    join_fragments(parts)
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn reply(&self, question: &str, context_text: &str) -> Result<String, ChatError> {
        debug!(model = %self.model, "calling OpenAI");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body(&self.model, question, context_text))
            .send()
            .await?;

        let body = read_json(response, FAILURE_MESSAGE).await?;
        Ok(extract_reply(&body))
    }
}

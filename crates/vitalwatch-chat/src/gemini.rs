//! Gemini `generateContent` adapter.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ChatError;
use crate::prompt::build_prompt;
use crate::provider::{ChatProvider, ProviderKind, join_fragments, read_json};

pub const GEMINI_MODELS_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const TEMPERATURE: f64 = 0.3;
pub const MAX_OUTPUT_TOKENS: u32 = 400;
const FAILURE_MESSAGE: &str = "Gemini API request failed.";

/// Characters left alone when a model name is placed in the URL path.
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_MODELS_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// `{base}/{model}:generateContent` with the model name percent-encoded.
/// The API key travels as the `key` query parameter.
pub fn endpoint_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/{}:generateContent",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(model, PATH_COMPONENT)
    )
}

pub fn request_body(question: &str, context_text: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [{ "text": build_prompt(question, context_text) }] },
        ],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "maxOutputTokens": MAX_OUTPUT_TOKENS,
        },
    })
}

/// Join the text of every part of every candidate.
pub fn extract_reply(body: &Value) -> String {
    let parts = body
        .get("candidates")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|c| c.pointer("/content/parts").and_then(Value::as_array))
        .flatten()
        .filter_map(|part| part.get("text").and_then(Value::as_str));

    join_fragments(parts)
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn reply(&self, question: &str, context_text: &str) -> Result<String, ChatError> {
        debug!(model = %self.model, "calling Gemini");

        let response = self
            .client
            .post(endpoint_url(&self.base_url, &self.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body(question, context_text))
            .send()
            .await?;

        let body = read_json(response, FAILURE_MESSAGE).await?;
        Ok(extract_reply(&body))
    }
}

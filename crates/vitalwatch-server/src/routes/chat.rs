use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::Json;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use vitalwatch_chat::provider::ChatReply;
use vitalwatch_chat::responder::{ChatAnswer, Responder};
use vitalwatch_core::models::chat_context::ChatContext;
use vitalwatch_core::models::evaluation::EvaluationResult;

use crate::error::{ApiError, QUESTION_REQUIRED};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChatRequest {
    question: Option<Value>,
    context: Option<Value>,
}

impl ChatRequest {
    /// A context that is not a JSON object counts as no context; ill-typed
    /// fields inside one are dropped individually.
    fn context(&self) -> ChatContext {
        self.context
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocalChatRequest {
    question: Option<Value>,
    /// The evaluation the browser last received from `/api/evaluate`.
    result: Option<Value>,
}

/// Strings are trimmed; numbers and booleans are stringified.
fn question_text(question: Option<&Value>) -> String {
    match question {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

/// An empty body reads as `{}`; a JSON value that is not an object carries
/// no fields. Only unparsable JSON is an error.
fn parse_body<T: DeserializeOwned + Default>(
    body: Result<Bytes, BytesRejection>,
) -> Result<T, ApiError> {
    let body = body.map_err(|e| ApiError::ChatInternal(e.to_string()))?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::ChatInternal(e.to_string()))?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    if state.chat.is_empty() {
        return Err(ApiError::ProviderUnavailable);
    }

    let request: ChatRequest = parse_body(body)?;
    let question = question_text(request.question.as_ref());
    if question.is_empty() {
        return Err(ApiError::BadRequest(QUESTION_REQUIRED.to_string()));
    }

    let reply = state.chat.ask(&question, &request.context()).await?;
    tracing::info!(provider = %reply.provider, "chat reply generated");
    Ok(Json(reply))
}

/// Canned answers from the intent matcher, for when the remote chat is
/// unavailable. Never leaves the process.
pub async fn local_chat(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatAnswer>, ApiError> {
    let request: LocalChatRequest = parse_body(body)?;
    let question = question_text(request.question.as_ref());

    let mut responder = Responder::local_only();
    if let Some(result) = request
        .result
        .and_then(|v| serde_json::from_value::<EvaluationResult>(v).ok())
    {
        responder.update(result);
    }

    let answer = responder.answer(&question).await;
    tracing::debug!(source = ?answer.source, "local chat answer");
    Ok(Json(answer))
}

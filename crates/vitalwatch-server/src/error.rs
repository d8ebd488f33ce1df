use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use vitalwatch_chat::error::ChatError;
use vitalwatch_report::error::ReportError;
use vitalwatch_rules::error::ValidationError;

pub const ORIGIN_NOT_ALLOWED: &str = "Origin not allowed.";
pub const RATE_LIMITED: &str = "Too many chat requests. Please wait and try again.";
pub const QUESTION_REQUIRED: &str = "Question is required.";
pub const CHAT_INTERNAL: &str = "Server error while generating chat response.";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    RateLimited {
        retry_after_secs: u64,
        /// Window reset as Unix milliseconds.
        reset_at_ms: i64,
    },
    /// No provider key is configured.
    ProviderUnavailable,
    /// Every provider failed; one entry per provider.
    ProviderFailed(Vec<String>),
    /// Anything unexpected while handling a chat request.
    ChatInternal(String),
    Internal(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reset_at: Option<i64>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            reset_at: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::new(msg)),
            ApiError::RateLimited {
                retry_after_secs,
                reset_at_ms,
            } => {
                let body = ErrorBody {
                    reset_at: Some(reset_at_ms),
                    ..ErrorBody::new(RATE_LIMITED)
                };
                let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
                response.headers_mut().insert(
                    header::RETRY_AFTER,
                    HeaderValue::from(retry_after_secs),
                );
                return response;
            }
            ApiError::ProviderUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(ChatError::NotConfigured.to_string()),
            ),
            ApiError::ProviderFailed(failures) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    details: Some(failures),
                    ..ErrorBody::new(ChatError::AllProvidersFailed(Vec::new()).to_string())
                },
            ),
            ApiError::ChatInternal(msg) => {
                tracing::error!("chat error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(CHAT_INTERNAL))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::NotConfigured => ApiError::ProviderUnavailable,
            ChatError::AllProvidersFailed(failures) => ApiError::ProviderFailed(failures),
            other => ApiError::ChatInternal(other.to_string()),
        }
    }
}

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jiff::Timestamp;

use super::client_ip;
use crate::error::{ApiError, ORIGIN_NOT_ALLOWED};
use crate::rate_limit::{RateDecision, retry_after_secs};
use crate::state::AppState;

/// Origin allow-list, then the per-IP rate limit. Runs before the chat handler.
pub async fn chat_guard(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let allowed = origin
            .to_str()
            .map(|o| state.config.is_origin_allowed(o))
            .unwrap_or(false);
        if !allowed {
            tracing::info!(origin = ?origin, "chat request from disallowed origin");
            return ApiError::Forbidden(ORIGIN_NOT_ALLOWED.to_string()).into_response();
        }
    }

    let client = client_ip(&req);
    let now = Timestamp::now();
    let decision = match state.rate_limiter.lock() {
        Ok(mut limiter) => limiter.check(&client, now),
        Err(poisoned) => poisoned.into_inner().check(&client, now),
    };

    if let RateDecision::Limited { reset_at } = decision {
        tracing::info!(client = %client, reset_at = %reset_at, "chat request rate limited");
        return ApiError::RateLimited {
            retry_after_secs: retry_after_secs(reset_at, now),
            reset_at_ms: reset_at.as_millisecond(),
        }
        .into_response();
    }

    next.run(req).await
}

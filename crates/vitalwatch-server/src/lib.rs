//! vitalwatch-server
//!
//! Static files plus the JSON API: `/api/chat` behind the origin check and
//! per-IP rate limit, the `/api/chat/local` intent matcher, `/api/evaluate`,
//! `/api/report.pdf` and `/health`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod rate_limit;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Request bodies above this size are rejected.
pub const MAX_BODY_BYTES: usize = 1_000_000;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid allowed origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full router.
pub fn app(state: AppState) -> Router {
    let chat = post(routes::chat::chat)
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::chat_guard::chat_guard,
        ))
        .fallback(routes::static_files::serve);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/chat", chat)
        .route("/api/chat/local", post(routes::chat::local_chat))
        .route("/api/evaluate", post(routes::evaluate::evaluate))
        .route("/api/report.pdf", post(routes::report::report_pdf))
        .fallback(routes::static_files::serve)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors_layer(&state.config.allowed_origins))
        .with_state(state)
}

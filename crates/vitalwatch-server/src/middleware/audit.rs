use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::client_ip;

/// Audit logging middleware.
///
/// Logs every request as a structured event once the response is ready.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let client = client_ip(&req);
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        client = %client,
        latency_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}

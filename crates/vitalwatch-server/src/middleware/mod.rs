pub mod audit;
pub mod chat_guard;

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::Request;

/// Client address for rate limiting: the first `X-Forwarded-For` entry, else
/// the socket peer, else `"unknown"`.
pub fn client_ip<B>(req: &Request<B>) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

//! GET-only file service below the configured root.

use std::io;
use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;

use crate::state::AppState;

pub const INDEX_FILE: &str = "index.html";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Content type by file extension, case-insensitive.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "md" => "text/markdown; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The path climbs above the root.
    Outside,
    /// The path is not valid percent-encoded UTF-8.
    Malformed,
}

/// Map a request path to a path relative to the root.
///
/// The path is percent-decoded first, `/` maps to the index document, and
/// `.`/`..` segments are applied lexically. A `..` that would leave the root
/// is rejected rather than clamped.
pub fn resolve_request_path(raw: &str) -> Result<PathBuf, ResolveError> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ResolveError::Malformed)?;
    if decoded.contains('\0') {
        return Err(ResolveError::Malformed);
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(ResolveError::Outside);
                }
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Ok(PathBuf::from(INDEX_FILE));
    }
    Ok(segments.iter().collect())
}

fn text_response(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

fn not_found() -> Response {
    text_response(StatusCode::NOT_FOUND, "Not found")
}

fn forbidden() -> Response {
    text_response(StatusCode::FORBIDDEN, "Forbidden")
}

/// Fallback handler for every request no API route claimed.
pub async fn serve(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return text_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let relative = match resolve_request_path(uri.path()) {
        Ok(relative) => relative,
        Err(ResolveError::Outside) => {
            tracing::warn!(path = uri.path(), "path traversal rejected");
            return forbidden();
        }
        Err(ResolveError::Malformed) => return not_found(),
    };

    match read_below_root(&state.config.root, &relative).await {
        Ok(Some(bytes)) => (
            [(header::CONTENT_TYPE, content_type_for(&relative))],
            bytes,
        )
            .into_response(),
        Ok(None) => forbidden(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => not_found(),
        Err(e) => {
            tracing::debug!(path = %relative.display(), error = %e, "static file unavailable");
            not_found()
        }
    }
}

/// Read `root/relative` if it is a regular file that still lies below the
/// root once symlinks are resolved. `Ok(None)` means it escapes the root.
async fn read_below_root(root: &Path, relative: &Path) -> io::Result<Option<Vec<u8>>> {
    let root = tokio::fs::canonicalize(root).await?;
    let full = tokio::fs::canonicalize(root.join(relative)).await?;
    if !full.starts_with(&root) {
        return Ok(None);
    }

    let metadata = tokio::fs::metadata(&full).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"));
    }
    tokio::fs::read(&full).await.map(Some)
}

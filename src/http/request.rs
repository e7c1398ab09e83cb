//! Request inspection and rewriting.
//!
//! # Responsibilities
//! - Extract routing-relevant information (host, path)
//! - Replace the request path while keeping the query string
//! - Point a request at the upstream authority for forwarding
//!
//! # Design Decisions
//! - `Host` header wins; the URI authority is the fallback (HTTP/2 `:authority`)
//! - A missing or non-UTF-8 host reads as empty, which resolves to pass-through

use axum::http::uri::{Authority, InvalidUri, InvalidUriParts, PathAndQuery, Scheme};
use axum::http::{header, Request, Uri};

/// Error building a rewritten URI.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("invalid rewritten path: {0}")]
    InvalidPath(#[from] InvalidUri),

    #[error("invalid rewritten uri: {0}")]
    InvalidParts(#[from] InvalidUriParts),
}

/// The host the client addressed, including any port.
pub fn request_host<B>(req: &Request<B>) -> &str {
    req.headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| req.uri().authority().map(|a| a.as_str()))
        .unwrap_or("")
}

/// Replace the path of `uri`, preserving scheme, authority and query.
pub fn rewrite_path(uri: &Uri, new_path: &str) -> Result<Uri, RewriteError> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", new_path, query),
        None => new_path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}

/// Absolute-form URI for the upstream, keeping path and query.
pub fn upstream_uri(uri: &Uri, upstream: &Authority) -> Result<Uri, RewriteError> {
    let mut parts = uri.clone().into_parts();
    parts.scheme = Some(Scheme::HTTP);
    parts.authority = Some(upstream.clone());
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    Ok(Uri::from_parts(parts)?)
}

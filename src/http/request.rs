//! Request handling and transformation.
//!
//! # Responsibilities
//! - Read the request ID assigned by the request-ID layer
//! - Determine the host the caller addressed
//! - Rewrite the inbound request into the outbound one for the resolved target
//!
//! # Design Decisions
//! - The body is moved, never buffered, so uploads stream to the origin
//! - The query string is copied from the inbound URI untouched
//! - Outbound requests are always HTTP/1.1

use axum::{
    body::Body,
    http::{
        header::{self, HeaderName},
        request::Parts,
        HeaderMap, HeaderValue, Request, Uri, Version,
    },
};

use crate::error::ProxyError;
use crate::routing::ParsedTarget;
use crate::security::headers::{apply_forwarding_headers, strip_hop_by_hop};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID for logging, or `"unknown"` if the layer did not run.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Host the caller addressed: the `Host` header, falling back to the URI
/// authority for absolute-form and HTTP/2 requests.
pub fn effective_host(parts: &Parts) -> Option<HeaderValue> {
    parts.headers.get(header::HOST).cloned().or_else(|| {
        parts
            .uri
            .authority()
            .and_then(|a| HeaderValue::from_str(a.as_str()).ok())
    })
}

/// Default rewrite step: point `request` at `target`.
///
/// Scheme, authority and path come from the target, the query from the
/// inbound URI. `Host` becomes the target host and the proxy tracking headers
/// are added after hop-by-hop headers are removed.
pub fn rewrite_request(
    request: Request<Body>,
    target: &ParsedTarget,
) -> Result<Request<Body>, ProxyError> {
    let (mut parts, body) = request.into_parts();
    let original_host = effective_host(&parts);

    let path_and_query = match parts.uri.query() {
        Some(query) => format!("{}?{}", target.remaining_path, query),
        None => target.remaining_path.clone(),
    };

    parts.uri = Uri::builder()
        .scheme(target.scheme.as_str())
        .authority(target.host.as_str())
        .path_and_query(path_and_query)
        .build()
        .map_err(|e| ProxyError::InvalidTarget(e.to_string()))?;
    parts.version = Version::HTTP_11;

    let target_host = HeaderValue::from_str(&target.host)
        .map_err(|e| ProxyError::InvalidTarget(e.to_string()))?;

    strip_hop_by_hop(&mut parts.headers);
    parts.headers.insert(header::HOST, target_host.clone());
    apply_forwarding_headers(&mut parts.headers, original_host.as_ref(), &target_host);

    Ok(Request::from_parts(parts, body))
}

//! Response handling and transformation.
//!
//! # Responsibilities
//! - Relay the origin's response to the caller
//! - Strip hop-by-hop headers
//! - Map proxy errors to plain-text responses
//!
//! # Design Decisions
//! - Streaming responses avoid buffering entire body
//! - A body error after headers were sent cannot become a 502 any more: it is
//!   logged and the caller's connection is aborted by hyper

use axum::{
    body::Body,
    http::Response as HttpResponse,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use tracing::Span;

use crate::error::ProxyError;
use crate::security::headers::strip_hop_by_hop;

/// Default error mapper: status from the error, reason as the body.
pub fn error_response(err: &ProxyError) -> Response {
    (
        err.status_code(),
        [(axum::http::header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        err.to_string(),
    )
        .into_response()
}

/// Turn the origin's response into the caller's response.
///
/// Status and end-to-end headers are kept as received. The body is streamed;
/// a failure while streaming is logged inside `span`.
pub fn relay(response: HttpResponse<Incoming>, span: Span) -> Response {
    let (mut parts, body) = response.into_parts();
    strip_hop_by_hop(&mut parts.headers);

    let body = body.map_err(move |e| {
        span.in_scope(|| {
            tracing::warn!(
                error = %e,
                "Upstream body failed after response headers were sent, aborting client connection"
            );
        });
        e
    });

    Response::from_parts(parts, Body::new(body))
}

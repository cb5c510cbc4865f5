//! Header manipulation for forwarded traffic.
//!
//! # Responsibilities
//! - Add X-Forwarded-Host, X-Origin-Host and X-Proxy-By to outbound requests
//! - Strip hop-by-hop headers in both directions
//!
//! # Design Decisions
//! - Never trust existing X-Forwarded-* from the caller: values are overwritten
//! - Headers named in `Connection` are treated as hop-by-hop as well

use axum::http::{
    header::{self, HeaderName},
    HeaderMap, HeaderValue,
};

pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");
pub const X_ORIGIN_HOST: HeaderName = HeaderName::from_static("x-origin-host");
pub const X_PROXY_BY: HeaderName = HeaderName::from_static("x-proxy-by");

/// Value of the `X-Proxy-By` header.
pub const PROXY_IDENTIFIER: &str = "path-proxy";

/// Headers that only apply to a single transport leg.
const HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    HeaderName::from_static("proxy-connection"),
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Remove hop-by-hop headers, including any listed in `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in listed.iter().chain(HOP_BY_HOP.iter()) {
        headers.remove(name);
    }
}

/// Set the proxy tracking headers on an outbound request.
///
/// `original_host` is the host the caller addressed, if it sent one.
pub fn apply_forwarding_headers(
    headers: &mut HeaderMap,
    original_host: Option<&HeaderValue>,
    target_host: &HeaderValue,
) {
    match original_host {
        Some(host) => {
            headers.insert(X_FORWARDED_HOST, host.clone());
        }
        None => {
            headers.remove(X_FORWARDED_HOST);
        }
    }
    headers.insert(X_ORIGIN_HOST, target_host.clone());
    headers.insert(X_PROXY_BY, HeaderValue::from_static(PROXY_IDENTIFIER));
}

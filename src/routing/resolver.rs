//! Target resolution from the request path.
//!
//! A request path of the form `/<scheme>://<host>[:port][/path...]` is split
//! into the origin to contact and the path to forward to it. Resolution is a
//! pure function of the path string: the query component never reaches this
//! module because it lives in the request URI separately.

use std::fmt;

use url::Url;

use crate::error::ProxyError;

const SCHEME_SEPARATOR: &str = "://";

/// Origin and forwarded path decoded from one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    /// URL scheme, e.g. `https`. Non-HTTP schemes are accepted here.
    pub scheme: String,
    /// Host, with `:port` appended when a non-default port was given.
    pub host: String,
    /// Path forwarded to the origin. Always starts with `/`.
    pub remaining_path: String,
}

impl ParsedTarget {
    /// `scheme://host` of the target.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

impl fmt::Display for ParsedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.remaining_path)
    }
}

/// Decode `path` into a [`ParsedTarget`].
///
/// Only the first `://` is treated as the scheme separator, so URLs nested in
/// the forwarded path are kept as literal path segments. When nothing follows
/// the authority the forwarded path is `/`.
pub fn resolve(path: &str) -> Result<ParsedTarget, ProxyError> {
    let clean = path.strip_prefix('/').unwrap_or(path);

    let scheme_end = clean.find(SCHEME_SEPARATOR).ok_or(ProxyError::InvalidFormat)?;
    let host_start = scheme_end + SCHEME_SEPARATOR.len();

    let (authority, remaining_path) = match clean[host_start..].find('/') {
        Some(offset) => clean.split_at(host_start + offset),
        None => (clean, "/"),
    };

    let url = Url::parse(authority).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase if scheme_end == 0 => ProxyError::MissingScheme,
        url::ParseError::EmptyHost => ProxyError::MissingHost,
        other => ProxyError::ParseFailure(other),
    })?;

    if url.scheme().is_empty() {
        return Err(ProxyError::MissingScheme);
    }
    let host = match url.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(ProxyError::MissingHost),
    };
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Ok(ParsedTarget {
        scheme: url.scheme().to_string(),
        host,
        remaining_path: remaining_path.to_string(),
    })
}

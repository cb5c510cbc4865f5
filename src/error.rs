//! Proxy error taxonomy.
//!
//! Resolution errors are caused by the client and never reach the network.
//! Upstream errors come from the round trip to the resolved origin.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure while resolving or forwarding a single request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The path does not contain a `://` separator.
    #[error("invalid format: expected /http(s)://host/path")]
    InvalidFormat,

    /// The authority segment is not a syntactically valid URL.
    #[error("failed to parse target URL: {0}")]
    ParseFailure(#[from] url::ParseError),

    #[error("missing scheme in target URL")]
    MissingScheme,

    #[error("missing host in target URL")]
    MissingHost,

    /// The resolved target could not be turned into an outbound request.
    #[error("Proxy error: invalid target: {0}")]
    InvalidTarget(String),

    /// Transport failure while contacting the origin.
    #[error("Proxy error: {0}")]
    UpstreamFailure(String),

    #[error("Proxy error: upstream did not respond within {}s", .0.as_secs())]
    UpstreamTimeout(Duration),
}

impl ProxyError {
    /// Build an upstream failure carrying the whole `source()` chain, so the
    /// description names the root cause and not only the outermost wrapper.
    pub fn upstream(err: &(dyn std::error::Error + 'static)) -> Self {
        ProxyError::UpstreamFailure(error_chain(err))
    }

    /// HTTP status returned to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidFormat
            | ProxyError::ParseFailure(_)
            | ProxyError::MissingScheme
            | ProxyError::MissingHost => StatusCode::BAD_REQUEST,
            ProxyError::InvalidTarget(_)
            | ProxyError::UpstreamFailure(_)
            | ProxyError::UpstreamTimeout(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// True when the error was caused by the request path itself.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        crate::http::response::error_response(&self)
    }
}

/// Join an error and its sources into a single `a: b: c` line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper wrappers sometimes repeat their inner message
        if !out.ends_with(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

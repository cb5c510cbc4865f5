//! Single-target request forwarding.
//!
//! # Responsibilities
//! - Rewrite the inbound request for the resolved target
//! - Perform the round trip over HTTP or HTTPS
//! - Relay the response, or map the failure to a caller-visible response
//!
//! # Design Decisions
//! - Rewrite and error mapping are plain functions injected at construction
//! - One attempt per request, no retries
//! - Errors never escape `forward`: the caller always gets a response

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    response::Response,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tracing::{Instrument, Span};

use crate::error::ProxyError;
use crate::http::request::{request_id, rewrite_request};
use crate::http::response::{error_response, relay};
use crate::resilience::timeouts::with_deadline;
use crate::routing::ParsedTarget;

/// Outbound client used for every origin.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Turns the inbound request into the request sent to the origin.
pub type RewriteFn = fn(Request<Body>, &ParsedTarget) -> Result<Request<Body>, ProxyError>;

/// Turns a forwarding failure into the response sent to the caller.
pub type ErrorMapper = fn(&ProxyError) -> Response;

/// Build the outbound client: HTTP and HTTPS origins, HTTP/1.1 only.
///
/// The TLS provider is passed explicitly, so no process-wide rustls state is
/// installed.
pub fn build_client() -> Result<UpstreamClient, rustls::Error> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_nodelay(true);

    let https = HttpsConnectorBuilder::new()
        .with_provider_and_webpki_roots(rustls::crypto::ring::default_provider())?
        .https_or_http()
        .enable_http1()
        .wrap_connector(http);

    Ok(Client::builder(TokioExecutor::new()).build(https))
}

/// Forwards one request to one resolved target.
#[derive(Clone)]
pub struct Forwarder {
    client: UpstreamClient,
    rewrite: RewriteFn,
    on_error: ErrorMapper,
    upstream_timeout: Option<Duration>,
    span: Span,
}

impl Forwarder {
    /// Create a forwarder with the default rewrite and error mapping.
    /// Events are recorded under `span`.
    pub fn new(client: UpstreamClient, span: Span) -> Self {
        Self {
            client,
            rewrite: rewrite_request,
            on_error: error_response,
            upstream_timeout: None,
            span,
        }
    }

    /// Fail requests whose origin has not answered within `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn with_rewrite(mut self, rewrite: RewriteFn) -> Self {
        self.rewrite = rewrite;
        self
    }

    pub fn with_error_mapper(mut self, on_error: ErrorMapper) -> Self {
        self.on_error = on_error;
        self
    }

    /// Send `request` to `target` and return the response for the caller.
    pub async fn forward(&self, target: &ParsedTarget, request: Request<Body>) -> Response {
        let span = tracing::info_span!(
            parent: &self.span,
            "forward",
            request_id = %request_id(request.headers()),
            origin = %target.origin(),
            path = %target.remaining_path,
        );

        self.round_trip(target, request, span.clone())
            .instrument(span)
            .await
    }

    async fn round_trip(&self, target: &ParsedTarget, request: Request<Body>, span: Span) -> Response {
        let outbound = match (self.rewrite)(request, target) {
            Ok(req) => req,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build upstream request");
                return (self.on_error)(&e);
            }
        };

        tracing::info!(url = %target, method = %outbound.method(), "Proxying request");

        let call = async {
            self.client
                .request(outbound)
                .await
                .map_err(|e| ProxyError::upstream(&e))
        };

        match with_deadline(self.upstream_timeout, call).await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "Upstream responded");
                relay(response, span)
            }
            Err(e) => {
                tracing::error!(url = %target, error = %e, "Upstream request failed");
                (self.on_error)(&e)
            }
        }
    }
}

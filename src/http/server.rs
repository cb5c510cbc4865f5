//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy handler
//! - Wire up middleware (tracing, request ID)
//! - Resolve the target from the request path
//! - Hand resolved requests to the forwarder

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ProxyConfig;
use crate::http::forwarder::{build_client, Forwarder};
use crate::http::request::{request_id, X_REQUEST_ID};
use crate::lifecycle::{shutdown, StartupError};
use crate::routing::resolve;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
    pub span: Span,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    span: Span,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// `span` is the logging context for everything the server and its
    /// forwarder record.
    pub fn new(config: ProxyConfig, span: Span) -> Result<Self, StartupError> {
        let client = build_client().map_err(StartupError::Tls)?;
        let forwarder = Forwarder::new(client, span.clone())
            .with_timeout(config.timeouts.upstream());

        let state = AppState {
            forwarder,
            span: span.clone(),
        };

        let router = Self::build_router(state);
        Ok(Self {
            router,
            config,
            span,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Serve on `listener` until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        self.span.in_scope(|| {
            tracing::info!(
                address = %addr,
                upstream_timeout_secs = ?self.config.timeouts.upstream_secs,
                "HTTP server starting"
            );
            tracing::info!("Usage: http://{}/https://example.com/api/endpoint", addr);
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        self.span.in_scope(|| tracing::info!("HTTP server stopped"));
        Ok(())
    }

    /// The router, for driving the proxy without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Main proxy handler.
/// Resolves the target from the path and forwards the request.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    state.span.in_scope(|| {
        tracing::info!(
            request_id = %request_id(request.headers()),
            method = %request.method(),
            path = %path,
            "Received request"
        )
    });

    let target = match resolve(&path) {
        Ok(target) => target,
        Err(e) => {
            let request_id = request_id(request.headers());
            state.span.in_scope(|| {
                if e.is_client_error() {
                    tracing::warn!(request_id = %request_id, path = %path, error = %e, "Failed to resolve target");
                } else {
                    tracing::error!(request_id = %request_id, path = %path, error = %e, "Failed to resolve target");
                }
            });
            return e.into_response();
        }
    };

    state.forwarder.forward(&target, request).await
}

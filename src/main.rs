//! Path-encoded HTTP reverse proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request                ┌──────────────────────────────────────────┐
//!     GET /https://example.com/x    │                path-proxy                │
//!     ──────────────────────────────┼─▶ http server ─▶ routing::resolve        │
//!                                   │                    │ ParsedTarget        │
//!                                   │                    │ (400 on failure)    │
//!                                   │                    ▼                     │
//!     Client Response               │                 forwarder ───────────────┼──▶ Origin
//!     ◀─────────────────────────────┼─────────────── (502 on transport error)◀─┼─── https://example.com/x
//!                                   └──────────────────────────────────────────┘
//! ```

use clap::Parser;

use path_proxy::config::{load_config, Args};
use path_proxy::lifecycle::{bind_listener, signals, Shutdown};
use path_proxy::observability::init_logging;
use path_proxy::HttpServer;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let args = Args::parse();
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            // logging is configured from this config, so it is not up yet
            eprintln!("path-proxy: {e}");
            return std::process::ExitCode::from(2);
        }
    };

    let _log_guard = init_logging(&config.observability);
    let span = tracing::info_span!("proxy");

    span.in_scope(|| {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            bind_address = %config.listener.bind_address,
            upstream_timeout_secs = ?config.timeouts.upstream_secs,
            "path-proxy starting"
        )
    });

    let listener = match bind_listener(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            span.in_scope(|| tracing::error!(error = %e, "Server failed to start"));
            return std::process::ExitCode::FAILURE;
        }
    };

    let server = match HttpServer::new(config, span.clone()) {
        Ok(server) => server,
        Err(e) => {
            span.in_scope(|| tracing::error!(error = %e, "Server failed to start"));
            return std::process::ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown.clone()));

    if let Err(e) = server.run(listener, server_shutdown).await {
        span.in_scope(|| tracing::error!(error = %e, "Server terminated"));
        return std::process::ExitCode::FAILURE;
    }

    span.in_scope(|| tracing::info!("Shutdown complete"));
    std::process::ExitCode::SUCCESS
}

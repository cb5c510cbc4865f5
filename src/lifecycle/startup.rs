//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the TCP listener once configuration and logging are ready
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal to the process

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error raised before the proxy starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid bind address `{address}`: {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to initialise upstream TLS: {0}")]
    Tls(#[source] rustls::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },
}

/// Bind the configured listen address.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| StartupError::Address {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    tracing::info!(address = %address, "Listener bound");
    Ok(listener)
}

//! Configuration schema definitions.
//!
//! This module defines the complete runtime configuration of the proxy.
//! Every field has a default so the proxy runs with no flags at all.

use std::time::Duration;

/// Root configuration for the proxy.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Outbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for upstream round trips.
#[derive(Debug, Clone, Default)]
pub struct TimeoutConfig {
    /// Deadline for receiving the origin's response headers, in seconds.
    /// `None` waits indefinitely.
    pub upstream_secs: Option<u64>,
}

impl TimeoutConfig {
    pub fn upstream(&self) -> Option<Duration> {
        self.upstream_secs.map(Duration::from_secs)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// Observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub log_filter: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "path_proxy=info,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

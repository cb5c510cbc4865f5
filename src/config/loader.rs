//! Configuration loading from the command line.

use clap::Parser;

use crate::config::schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ProxyConfig, TimeoutConfig,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Path-encoded HTTP reverse proxy.
///
/// Forwards `/<scheme>://<host>[:port]/<path>` to `<scheme>://<host>[:port]/<path>`.
#[derive(Debug, Parser)]
#[command(name = "path-proxy", version)]
pub struct Args {
    /// Address to listen on.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Give up on an origin that has not sent response headers after this
    /// many seconds. Unset means wait indefinitely.
    #[arg(long)]
    pub upstream_timeout_secs: Option<u64>,

    /// Default log filter directive; RUST_LOG overrides it.
    #[arg(long, default_value = "path_proxy=info,tower_http=info")]
    pub log_filter: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl From<Args> for ProxyConfig {
    fn from(args: Args) -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: args.bind,
            },
            timeouts: TimeoutConfig {
                upstream_secs: args.upstream_timeout_secs,
            },
            observability: ObservabilityConfig {
                log_filter: args.log_filter,
                log_format: args.log_format,
            },
        }
    }
}

/// Build and validate configuration from parsed arguments.
pub fn load_config(args: Args) -> Result<ProxyConfig, ConfigError> {
    let config = ProxyConfig::from(args);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

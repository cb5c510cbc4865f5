//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command-line flags
//!     → loader.rs (clap parse, map to schema)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to startup, logging and the HTTP server
//! ```
//!
//! # Design Decisions
//! - No config files and no environment variables besides RUST_LOG
//! - All fields have defaults so the proxy runs with no flags
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, Args, ConfigError};
pub use schema::{ListenerConfig, LogFormat, ObservabilityConfig, ProxyConfig, TimeoutConfig};

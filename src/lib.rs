//! Path-encoded HTTP reverse proxy library.
//!
//! A request to `/https://example.com/api/foo` is forwarded to
//! `https://example.com/api/foo` and the origin's response is streamed back.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod security;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{resolve, ParsedTarget};

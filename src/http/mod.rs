//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, proxy handler)
//!     → [routing::resolve decides the target from the path]
//!     → forwarder.rs (rewrite via request.rs, round trip, error mapping)
//!     → response.rs (strip hop-by-hop, stream body back)
//!     → Send to client
//! ```

pub mod forwarder;
pub mod request;
pub mod response;
pub mod server;

pub use forwarder::{build_client, ErrorMapper, Forwarder, RewriteFn, UpstreamClient};
pub use request::X_REQUEST_ID;
pub use server::HttpServer;

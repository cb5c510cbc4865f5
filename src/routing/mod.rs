//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path ("/https://example.com/api/foo")
//!     → resolver.rs (split at first "://", parse authority)
//!     → Return: ParsedTarget { scheme, host, remaining_path } or ProxyError
//! ```
//!
//! # Design Decisions
//! - There is no route table: the target is carried by the path itself
//! - Resolution is pure and deterministic, no I/O and no shared state
//! - Failures short-circuit before any upstream connection is attempted

pub mod resolver;

pub use resolver::{resolve, ParsedTarget};

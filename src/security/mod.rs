//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound request:
//!     → headers.rs (strip hop-by-hop, add X-Forwarded-Host / X-Origin-Host / X-Proxy-By)
//! Upstream response:
//!     → headers.rs (strip hop-by-hop before relaying)
//! ```
//!
//! # Design Decisions
//! - No trust in client input: tracking headers are always overwritten

pub mod headers;

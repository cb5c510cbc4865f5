//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to origin:
//!     → timeouts.rs (optional deadline on the response headers)
//! ```
//!
//! # Design Decisions
//! - No retries: exactly one attempt per request
//! - No deadline unless configured; an origin that hangs holds only its own task

pub mod timeouts;

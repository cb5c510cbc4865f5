//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (request_id, target, error)
//!     → logging.rs (filter, format, non-blocking stdout writer)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every event of a request
//! - Components receive their log span at construction instead of reaching for globals

pub mod logging;

pub use logging::init_logging;

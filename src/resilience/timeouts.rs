//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap the upstream round trip with an optional deadline
//! - Cancel the in-flight call cleanly on timeout
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other upstream errors but map to the same 502

use std::future::Future;
use std::time::Duration;

use crate::error::ProxyError;

/// Run `call`, failing with [`ProxyError::UpstreamTimeout`] if `deadline`
/// elapses first. With no deadline the call runs to completion.
pub async fn with_deadline<F, T>(deadline: Option<Duration>, call: F) -> Result<T, ProxyError>
where
    F: Future<Output = Result<T, ProxyError>>,
{
    match deadline {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| ProxyError::UpstreamTimeout(limit))?,
        None => call.await,
    }
}

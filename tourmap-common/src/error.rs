//! Common error types for tourmap

use thiserror::Error;

/// Common result type for collection operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors from the remote collection endpoints.
///
/// A fetch failure is a service-unavailable condition for the caller:
/// the system has no local store, so nothing can be served without the
/// remote collections. Never retried internally.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong while a request was in flight. Whether the
/// failure is worth another attempt is answered by [`IsRetryable`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The caller cancelled the request before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// The HTTP library refused to build the request.
    ///
    /// This indicates a configuration error rather than a transient failure.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Extension trait for checking if an error is retryable.
///
/// Determines whether an error represents a transient failure for which
/// an unchanged re-attempt has a reasonable chance of succeeding. The
/// decision of *when* to re-attempt belongs to the caller.
pub trait IsRetryable {
    /// Returns true if the error is potentially transient and should be retried.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for HttpError {
    fn is_retryable(&self) -> bool {
        match self {
            // Transport failures are transient; a cancelled attempt never
            // reached a verdict and can be replayed as-is
            Self::Connection(_) | Self::Timeout | Self::Cancelled => true,
            Self::InvalidRequest(_) => false,
        }
    }
}

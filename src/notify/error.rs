//! Error types for notification delivery.

use thiserror::Error;

use crate::template::RenderError;
use crate::webhook::{HttpError, IsRetryable};

/// Why a single delivery attempt failed.
///
/// Each variant belongs to exactly one stage of the attempt, so callers
/// never need to inspect where an error came from. Retryability is
/// resolved through [`IsRetryable`].
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The title or text template failed to render. Never retryable.
    #[error("failed to template 'title' or 'text': {0}")]
    Render(#[from] RenderError),

    /// The payload could not be serialized or the request could not be
    /// assembled. Never retryable.
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// The request failed in flight.
    ///
    /// Retryable unless the HTTP library rejected the request itself.
    #[error("failed to send request: {0}")]
    Network(#[source] HttpError),

    /// The endpoint answered with a non-2xx status. Retryable only for 5xx.
    #[error("unexpected status code {status} from {url}")]
    UnexpectedStatus {
        /// Status code returned by the endpoint
        status: u16,
        /// The webhook URL the request was sent to
        url: url::Url,
    },
}

impl NotifyError {
    /// Returns the status code if the endpoint answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl IsRetryable for NotifyError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Render(_) | Self::RequestConstruction(_) => false,
            Self::Network(e) => e.is_retryable(),
            // 5xx signals transient server trouble; everything else
            // (1xx, 3xx, 4xx, out of range) will not change on replay
            Self::UnexpectedStatus { status, .. } => (500..600).contains(status),
        }
    }
}

/// The configured webhook URL does not use HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("webhook URL must use http or https, got '{scheme}'")]
pub struct UnsupportedScheme {
    /// The rejected scheme
    pub scheme: String,
}

//! Delivery outcome and status classification.

use crate::webhook::IsRetryable;

use super::NotifyError;

/// The outcome of one delivery attempt.
///
/// A successful verdict is never retryable: the only ways to build one are
/// [`DeliveryVerdict::success`] and converting a [`NotifyError`], which
/// takes retryability from the error.
#[derive(Debug)]
#[must_use]
pub struct DeliveryVerdict {
    retryable: bool,
    error: Option<NotifyError>,
}

impl DeliveryVerdict {
    /// The message was accepted.
    pub const fn success() -> Self {
        Self {
            retryable: false,
            error: None,
        }
    }

    /// Returns true if the caller should schedule another attempt.
    #[must_use]
    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&NotifyError> {
        self.error.as_ref()
    }

    /// Returns true if the message was accepted.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Splits the verdict into `(retryable, error)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<NotifyError>) {
        (self.retryable, self.error)
    }

    /// Converts the verdict back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure if the attempt did not succeed.
    pub fn into_result(self) -> Result<(), NotifyError> {
        self.error.map_or(Ok(()), Err)
    }
}

impl From<NotifyError> for DeliveryVerdict {
    fn from(error: NotifyError) -> Self {
        Self {
            retryable: error.is_retryable(),
            error: Some(error),
        }
    }
}

impl From<Result<(), NotifyError>> for DeliveryVerdict {
    fn from(result: Result<(), NotifyError>) -> Self {
        result.map_or_else(Self::from, |()| Self::success())
    }
}

/// Checks a response status against the webhook success policy.
///
/// Only `[200, 300)` counts as delivered.
///
/// # Errors
///
/// Returns [`NotifyError::UnexpectedStatus`] for any other code.
pub fn check_status(status: u16, url: &url::Url) -> Result<(), NotifyError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    Err(NotifyError::UnexpectedStatus {
        status,
        url: url.clone(),
    })
}

/// Classifies a response status into a verdict.
///
/// - `[200, 300)`: success
/// - `[500, 600)`: retryable failure
/// - anything else: terminal failure
pub fn classify(status: u16, url: &url::Url) -> DeliveryVerdict {
    check_status(status, url).into()
}

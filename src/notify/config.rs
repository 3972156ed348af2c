//! Channel configuration and per-attempt context.

use tokio_util::sync::CancellationToken;

use crate::alert::LabelSet;
use crate::template::{DEFAULT_TEXT, DEFAULT_TITLE};

use super::UnsupportedScheme;

/// Immutable configuration of a DingTalk channel.
///
/// Built once at setup and shared read-only by every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    webhook_url: url::Url,
    title: String,
    text: String,
}

impl NotificationConfig {
    /// Creates a configuration with the default title and text templates.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedScheme`] if the URL is not `http` or `https`.
    pub fn new(webhook_url: url::Url) -> Result<Self, UnsupportedScheme> {
        if !matches!(webhook_url.scheme(), "http" | "https") {
            return Err(UnsupportedScheme {
                scheme: webhook_url.scheme().to_string(),
            });
        }

        Ok(Self {
            webhook_url,
            title: DEFAULT_TITLE.to_string(),
            text: DEFAULT_TEXT.to_string(),
        })
    }

    /// Sets the title template.
    #[must_use]
    pub fn with_title(mut self, template: impl Into<String>) -> Self {
        self.title = template.into();
        self
    }

    /// Sets the text template.
    #[must_use]
    pub fn with_text(mut self, template: impl Into<String>) -> Self {
        self.text = template.into();
        self
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn webhook_url(&self) -> &url::Url {
        &self.webhook_url
    }

    /// Returns the title template.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the text template.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Caller-supplied context for one attempt.
///
/// Carries the cancellation signal along with the routing data the
/// grouping stage attached to the alerts.
#[derive(Debug, Clone, Default)]
pub struct NotifyContext {
    cancel: CancellationToken,
    receiver: String,
    group_labels: LabelSet,
    external_url: Option<String>,
}

impl NotifyContext {
    /// Creates a context for the named receiver with a fresh token.
    #[must_use]
    pub fn new(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            ..Self::default()
        }
    }

    /// Uses the given token to cancel the attempt.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Sets the labels the alerts were grouped by.
    #[must_use]
    pub fn with_group_labels(mut self, labels: LabelSet) -> Self {
        self.group_labels = labels;
        self
    }

    /// Sets the link back to the alerting system.
    #[must_use]
    pub fn with_external_url(mut self, url: Option<String>) -> Self {
        self.external_url = url;
        self
    }

    /// Returns the cancellation token.
    #[must_use]
    pub const fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Returns the receiver name.
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Returns the group labels.
    #[must_use]
    pub const fn group_labels(&self) -> &LabelSet {
        &self.group_labels
    }

    /// Returns the external URL, if set.
    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        self.external_url.as_deref()
    }
}

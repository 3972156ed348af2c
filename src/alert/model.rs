//! Alert value types.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A set of name/value pairs identifying or describing an alert.
///
/// Ordered so that anything rendered from it is deterministic.
pub type LabelSet = BTreeMap<String, String>;

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
///
/// Alertmanager encodes an unset `endsAt` as this instant.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Whether an alert is still active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// The alert condition is ongoing.
    Firing,
    /// The alert condition has ended.
    Resolved,
}

impl AlertStatus {
    /// Returns the lowercase wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Firing => "firing",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single alert as delivered by the grouping stage.
///
/// Deserializes from the Alertmanager alert shape
/// (`labels`, `annotations`, `startsAt`, `endsAt`, `generatorURL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Identifying labels (`alertname`, `severity`, ...).
    #[serde(default)]
    pub labels: LabelSet,
    /// Descriptive annotations (`summary`, `description`, ...).
    #[serde(default)]
    pub annotations: LabelSet,
    /// When the alert started firing.
    pub starts_at: DateTime<Utc>,
    /// When the alert stopped (or is expected to stop) firing.
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    /// Link back to the rule that produced the alert.
    #[serde(default, rename = "generatorURL")]
    pub generator_url: Option<String>,
}

impl Alert {
    /// Creates an alert with no labels, no annotations and no end time.
    #[must_use]
    pub fn new(starts_at: DateTime<Utc>) -> Self {
        Self {
            labels: LabelSet::new(),
            annotations: LabelSet::new(),
            starts_at,
            ends_at: None,
            generator_url: None,
        }
    }

    /// Adds a label.
    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(name.into(), value.into());
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn with_annotation(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(name.into(), value.into());
        self
    }

    /// Sets the end time.
    #[must_use]
    pub const fn with_ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Sets the generator URL.
    #[must_use]
    pub fn with_generator_url(mut self, url: impl Into<String>) -> Self {
        self.generator_url = Some(url.into());
        self
    }

    /// Returns the `alertname` label, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.labels.get("alertname").map(String::as_str)
    }

    /// Returns the end time, treating the zero instant as unset.
    #[must_use]
    pub fn effective_ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at.filter(|t| t.timestamp() != ZERO_TIME_SECS)
    }

    /// Returns the status of the alert at the given instant.
    ///
    /// An alert is resolved once its end time is set and not after `now`.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> AlertStatus {
        match self.effective_ends_at() {
            Some(ends_at) if ends_at <= now => AlertStatus::Resolved,
            _ => AlertStatus::Firing,
        }
    }
}

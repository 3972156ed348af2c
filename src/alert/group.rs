//! Alert group input as handed over by the grouping stage.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{Alert, AlertsError, LabelSet};

/// A batch of alerts destined for one notification attempt.
///
/// Accepts the Alertmanager webhook message shape
/// (`receiver`, `groupLabels`, `externalURL`, `alerts`) as well as a bare
/// JSON array of alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertGroup {
    /// Receiver name recorded by the grouping stage, if any.
    #[serde(default)]
    pub receiver: Option<String>,
    /// Labels the alerts were grouped by.
    #[serde(default)]
    pub group_labels: LabelSet,
    /// Link back to the alerting system.
    #[serde(default, rename = "externalURL")]
    pub external_url: Option<String>,
    /// The alerts themselves.
    pub alerts: Vec<Alert>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupInput {
    Message(AlertGroup),
    Bare(Vec<Alert>),
}

impl AlertGroup {
    /// Creates a group from the given alerts with no group labels.
    #[must_use]
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            ..Self::default()
        }
    }

    /// Parses a group from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AlertsError::Parse`] if the JSON matches neither accepted
    /// shape, or [`AlertsError::Empty`] if it holds no alerts.
    pub fn from_json(input: &str) -> Result<Self, AlertsError> {
        let group = match serde_json::from_str::<GroupInput>(input)? {
            GroupInput::Message(group) => group,
            GroupInput::Bare(alerts) => Self::new(alerts),
        };

        if group.alerts.is_empty() {
            return Err(AlertsError::Empty);
        }

        Ok(group)
    }

    /// Loads a group from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, AlertsError> {
        let content = std::fs::read_to_string(path).map_err(|e| AlertsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&content)
    }

    /// Reads a group from any reader (typically stdin).
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the content cannot be parsed.
    pub fn read_from(mut reader: impl Read) -> Result<Self, AlertsError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(AlertsError::Stdin)?;

        Self::from_json(&content)
    }
}

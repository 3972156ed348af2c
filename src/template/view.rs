//! The data view templates are rendered against.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::alert::{Alert, AlertStatus, LabelSet};

/// Template data for one notification attempt.
///
/// Built fresh per attempt from the alerts being delivered and consumed
/// only by the renderer. Field names follow the Alertmanager template data
/// (`receiver`, `status`, `alerts`, `groupLabels`, `commonLabels`, ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertGroupView<'a> {
    /// Name of the receiver the group is routed to.
    pub receiver: &'a str,
    /// `firing` if any alert is firing, otherwise `resolved`.
    pub status: AlertStatus,
    /// Every alert in the group.
    pub alerts: Vec<AlertView<'a>>,
    /// Alerts still firing.
    pub firing_alerts: Vec<AlertView<'a>>,
    /// Alerts that have resolved.
    pub resolved_alerts: Vec<AlertView<'a>>,
    /// Labels the group was formed by.
    pub group_labels: &'a LabelSet,
    /// Label pairs shared by every alert.
    pub common_labels: LabelSet,
    /// Annotation pairs shared by every alert.
    pub common_annotations: LabelSet,
    /// Link back to the alerting system.
    #[serde(rename = "externalURL")]
    pub external_url: Option<&'a str>,
}

/// A single alert as seen by templates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView<'a> {
    /// Status at the time the view was built.
    pub status: AlertStatus,
    /// Identifying labels.
    pub labels: &'a LabelSet,
    /// Descriptive annotations.
    pub annotations: &'a LabelSet,
    /// Start time, RFC 3339.
    pub starts_at: String,
    /// End time, RFC 3339, if set.
    pub ends_at: Option<String>,
    /// Link back to the rule that produced the alert.
    #[serde(rename = "generatorURL")]
    pub generator_url: Option<&'a str>,
}

impl<'a> AlertView<'a> {
    fn new(alert: &'a Alert, now: DateTime<Utc>) -> Self {
        Self {
            status: alert.status_at(now),
            labels: &alert.labels,
            annotations: &alert.annotations,
            starts_at: format_time(alert.starts_at),
            ends_at: alert.effective_ends_at().map(format_time),
            generator_url: alert.generator_url.as_deref(),
        }
    }
}

impl<'a> AlertGroupView<'a> {
    /// Builds the view for `alerts` as of `now`.
    #[must_use]
    pub fn new(
        receiver: &'a str,
        group_labels: &'a LabelSet,
        alerts: &'a [Alert],
        now: DateTime<Utc>,
    ) -> Self {
        let alerts: Vec<AlertView<'a>> = alerts.iter().map(|a| AlertView::new(a, now)).collect();

        let (firing_alerts, resolved_alerts): (Vec<_>, Vec<_>) = alerts
            .iter()
            .cloned()
            .partition(|a| a.status == AlertStatus::Firing);

        let status = if firing_alerts.is_empty() {
            AlertStatus::Resolved
        } else {
            AlertStatus::Firing
        };

        let common_labels = common_pairs(alerts.iter().map(|a| a.labels));
        let common_annotations = common_pairs(alerts.iter().map(|a| a.annotations));

        Self {
            receiver,
            status,
            alerts,
            firing_alerts,
            resolved_alerts,
            group_labels,
            common_labels,
            common_annotations,
            external_url: None,
        }
    }

    /// Sets the external URL exposed to templates.
    #[must_use]
    pub const fn with_external_url(mut self, url: Option<&'a str>) -> Self {
        self.external_url = url;
        self
    }
}

/// Returns the pairs present with equal values in every set.
///
/// Empty input yields an empty set.
fn common_pairs<'a>(mut sets: impl Iterator<Item = &'a LabelSet>) -> LabelSet {
    let Some(first) = sets.next() else {
        return LabelSet::new();
    };

    let mut common = first.clone();
    for set in sets {
        common.retain(|name, value| set.get(name).is_some_and(|other| *other == *value));
    }
    common
}

fn format_time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

//! Tests for `AlertGroup` parsing.

use super::{AlertGroup, AlertsError};
use std::io::Write;

const MESSAGE: &str = r#"{
    "receiver": "ops",
    "status": "firing",
    "groupLabels": {"alertname": "HighLatency"},
    "externalURL": "http://alertmanager:9093",
    "alerts": [
        {"labels": {"alertname": "HighLatency", "route": "/api"}, "startsAt": "2024-05-01T10:00:00Z"},
        {"labels": {"alertname": "HighLatency", "route": "/web"}, "startsAt": "2024-05-01T10:01:00Z"}
    ]
}"#;

mod from_json {
    use super::*;

    #[test]
    fn parses_webhook_message_shape() {
        let group = AlertGroup::from_json(MESSAGE).unwrap();

        assert_eq!(group.receiver.as_deref(), Some("ops"));
        assert_eq!(group.group_labels["alertname"], "HighLatency");
        assert_eq!(
            group.external_url.as_deref(),
            Some("http://alertmanager:9093")
        );
        assert_eq!(group.alerts.len(), 2);
    }

    #[test]
    fn parses_bare_array() {
        let json = r#"[{"labels": {"alertname": "Down"}, "startsAt": "2024-05-01T10:00:00Z"}]"#;

        let group = AlertGroup::from_json(json).unwrap();

        assert!(group.receiver.is_none());
        assert!(group.group_labels.is_empty());
        assert_eq!(group.alerts[0].name(), Some("Down"));
    }

    #[test]
    fn empty_array_is_rejected() {
        let result = AlertGroup::from_json("[]");

        assert!(matches!(result, Err(AlertsError::Empty)));
    }

    #[test]
    fn message_without_alerts_field_is_rejected() {
        let result = AlertGroup::from_json(r#"{"receiver": "ops"}"#);

        assert!(matches!(result, Err(AlertsError::Parse(_))));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let result = AlertGroup::from_json("{not json");

        assert!(matches!(result, Err(AlertsError::Parse(_))));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MESSAGE.as_bytes()).unwrap();

        let group = AlertGroup::load(file.path()).unwrap();

        assert_eq!(group.alerts.len(), 2);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let result = AlertGroup::load(std::path::Path::new("/nonexistent/alerts.json"));

        let err = result.unwrap_err();
        assert!(matches!(err, AlertsError::FileRead { .. }));
        assert!(err.to_string().contains("/nonexistent/alerts.json"));
    }

    #[test]
    fn read_from_reader() {
        let group = AlertGroup::read_from(MESSAGE.as_bytes()).unwrap();

        assert_eq!(group.alerts[1].labels["route"], "/web");
    }
}

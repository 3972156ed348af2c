//! Tests for the run module.

use super::*;

use std::io::Write;

use dingtalk_notify::config::Cli;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALERTS: &str = r#"{
    "receiver": "am-receiver",
    "groupLabels": {"alertname": "DiskFull"},
    "alerts": [
        {
            "labels": {"alertname": "DiskFull", "instance": "db-1"},
            "annotations": {"summary": "disk is 95% full"},
            "startsAt": "2024-05-01T10:00:00Z"
        }
    ]
}"#;

fn alerts_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn config(webhook_url: &str, alerts: &Path) -> ValidatedConfig {
    let cli = Cli::parse_from_iter([
        "dingtalk-notify",
        "--webhook-url",
        webhook_url,
        "--alerts",
        alerts.to_str().unwrap(),
        "--title",
        "{{receiver}}: {{commonLabels.alertname}}",
        "--timeout",
        "5",
    ]);
    ValidatedConfig::from_raw(&cli, None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn alerts_error_displays_source() {
        let err = RunError::from(AlertsError::Empty);

        assert!(err.to_string().starts_with("Failed to load alerts: "));
    }
}

mod load_alerts {
    use super::*;

    #[test]
    fn loads_from_file() {
        let file = alerts_file(ALERTS);

        let group = load_alerts(Some(file.path())).unwrap();

        assert_eq!(group.alerts.len(), 1);
        assert_eq!(group.receiver.as_deref(), Some("am-receiver"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_alerts(Some(&dir.path().join("absent.json")));

        assert!(matches!(result, Err(AlertsError::FileRead { .. })));
    }
}

mod execute {
    use super::*;

    #[tokio::test]
    async fn delivers_to_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/robot/send"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"errcode":0,"errmsg":"ok"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;
        let file = alerts_file(ALERTS);
        let url = format!("{}/robot/send?access_token=abc", server.uri());

        let verdict = execute(config(&url, file.path())).await.unwrap();

        assert!(verdict.is_success());
        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["markdown"]["title"], "am-receiver: DiskFull");
    }

    #[tokio::test]
    async fn server_error_is_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        let file = alerts_file(ALERTS);

        let verdict = execute(config(&server.uri(), file.path())).await.unwrap();

        assert!(verdict.retryable());
    }

    #[tokio::test]
    async fn empty_alerts_fail_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let file = alerts_file("[]");

        let result = execute(config(&server.uri(), file.path())).await;

        assert!(matches!(result, Err(RunError::Alerts(AlertsError::Empty))));
    }
}

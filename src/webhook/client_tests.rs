//! Tests for `ReqwestClient`.

use super::*;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn local_client() -> ReqwestClient {
    ReqwestClient::from_settings(&ClientSettings::default()).unwrap()
}

mod client_settings {
    use super::*;

    #[test]
    fn default_uses_ten_second_timeout() {
        let settings = ClientSettings::default();

        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert!(settings.proxy.is_none());
        assert!(!settings.accept_invalid_certs);
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        let settings = ClientSettings::default();

        assert!(settings.user_agent.starts_with("dingtalk-notify/"));
    }
}

mod reqwest_client {
    use super::*;

    #[test]
    fn from_settings_accepts_proxy() {
        let settings = ClientSettings {
            proxy: Some(url::Url::parse("http://proxy.internal:3128").unwrap()),
            ..ClientSettings::default()
        };

        assert!(ReqwestClient::from_settings(&settings).is_ok());
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn sends_method_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"msgtype":"markdown"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = local_client();
        let req = HttpRequest::post(url::Url::parse(&server.uri()).unwrap())
            .with_header(
                ::http::header::CONTENT_TYPE,
                ::http::HeaderValue::from_static("application/json"),
            )
            .with_body(br#"{"msgtype":"markdown"}"#.to_vec());

        let resp = client.request(req).await.unwrap();

        assert_eq!(resp.status, ::http::StatusCode::OK);
        assert_eq!(resp.body_text(), Some("ok"));
    }

    #[tokio::test]
    async fn non_success_status_is_returned_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let client = local_client();
        let req = HttpRequest::post(url::Url::parse(&server.uri()).unwrap());

        let resp = client.request(req).await.unwrap();

        assert_eq!(resp.status, ::http::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp.body_text(), Some("busy"));
    }

    #[tokio::test]
    async fn slow_server_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let settings = ClientSettings {
            timeout: Duration::from_millis(100),
            ..ClientSettings::default()
        };
        let client = ReqwestClient::from_settings(&settings).unwrap();
        let req = HttpRequest::post(url::Url::parse(&server.uri()).unwrap());

        let result = client.request(req).await;

        assert!(matches!(result, Err(HttpError::Timeout)), "got {result:?}");
    }

    #[tokio::test]
    async fn refused_connection_maps_to_connection_error() {
        // Bind then drop a listener to get a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = local_client();
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

        let result = client.request(HttpRequest::post(url)).await;

        assert!(matches!(result, Err(HttpError::Connection(_))), "got {result:?}");
    }
}

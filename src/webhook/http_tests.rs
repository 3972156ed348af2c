//! Tests for HTTP request/response types and transport errors.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, IsRetryable};

fn test_url() -> url::Url {
    url::Url::parse("https://oapi.dingtalk.com/robot/send?access_token=abc").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, test_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn post_keeps_query_string() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.url.query(), Some("access_token=abc"));
    }

    #[test]
    fn with_body_sets_body() {
        let body = br#"{"msgtype":"markdown"}"#.to_vec();
        let req = HttpRequest::post(test_url()).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_adds_single_header() {
        let req = HttpRequest::post(test_url()).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::post(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn with_status_has_empty_body_and_headers() {
        let resp = HttpResponse::with_status(http::StatusCode::ACCEPTED);

        assert_eq!(resp.status, http::StatusCode::ACCEPTED);
        assert!(resp.headers.is_empty());
        assert!(resp.body.is_empty());
    }

    #[test]
    fn is_success_returns_true_for_2xx() {
        for status in [
            http::StatusCode::OK,
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
        ] {
            assert!(
                HttpResponse::with_status(status).is_success(),
                "Expected {status} to be success"
            );
        }
    }

    #[test]
    fn is_success_returns_false_for_non_2xx() {
        for status in [
            http::StatusCode::CONTINUE,
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert!(
                !HttpResponse::with_status(status).is_success(),
                "Expected {status} to not be success"
            );
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            br#"{"errcode":0,"errmsg":"ok"}"#.to_vec(),
        );

        assert_eq!(resp.body_text(), Some(r#"{"errcode":0,"errmsg":"ok"}"#));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![0xFF, 0xFE]);

        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(error.source().unwrap().to_string().contains("refused"));
    }

    #[test]
    fn cancelled_displays_message() {
        assert_eq!(HttpError::Cancelled.to_string(), "Request cancelled");
    }

    #[test]
    fn invalid_request_displays_reason() {
        let error = HttpError::InvalidRequest("bad header".to_string());

        assert!(error.to_string().contains("Invalid request"));
        assert!(error.to_string().contains("bad header"));
    }

    #[test]
    fn transport_failures_are_retryable() {
        assert!(HttpError::Timeout.is_retryable());
        assert!(HttpError::Cancelled.is_retryable());
        assert!(HttpError::Connection(Box::new(std::io::Error::other("dns"))).is_retryable());
    }

    #[test]
    fn invalid_request_is_not_retryable() {
        assert!(!HttpError::InvalidRequest("bad".to_string()).is_retryable());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::with_status(http::StatusCode::OK))
        }
    }

    #[tokio::test]
    async fn arc_client_delegates_to_inner() {
        let inner = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let shared = Arc::clone(&inner);

        shared.request(HttpRequest::post(test_url())).await.unwrap();
        shared.request(HttpRequest::post(test_url())).await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}

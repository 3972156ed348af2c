//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use thiserror::Error;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport settings applied when building a [`ReqwestClient`].
///
/// Owned by the host; the notifier only ever sees the finished client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Total time allowed for one request, including reading the body.
    pub timeout: Duration,
    /// Proxy for all outbound traffic. `None` means direct connections.
    pub proxy: Option<url::Url>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
}

impl ClientSettings {
    /// Default request timeout (10 seconds).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default `User-Agent` header value.
    #[must_use]
    pub fn default_user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: Self::default_user_agent(),
            accept_invalid_certs: false,
        }
    }
}

/// The reqwest client could not be built from [`ClientSettings`].
#[derive(Debug, Error)]
#[error("Failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[source] reqwest::Error);

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements the
/// [`HttpClient`] trait. Cloning is cheap and shares the connection pool.
///
/// # Example
///
/// ```no_run
/// use dingtalk_notify::webhook::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://oapi.dingtalk.com/robot/send?access_token=abc")?;
/// let request = HttpRequest::post(url).with_body(b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Builds a client with the given transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the proxy is rejected or the TLS
    /// backend cannot be initialized.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientBuildError> {
        let mut builder = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .danger_accept_invalid_certs(settings.accept_invalid_certs);

        // Environment proxies are ignored; only an explicit proxy is used
        builder = match &settings.proxy {
            Some(proxy) => {
                builder.proxy(reqwest::Proxy::all(proxy.as_str()).map_err(ClientBuildError)?)
            }
            None => builder.no_proxy(),
        };

        let inner = builder.build().map_err(ClientBuildError)?;
        Ok(Self { inner })
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidRequest(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        // `bytes()` consumes the response; the connection goes back to the
        // pool (or is closed) whether or not the drain succeeds
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::debug!(%status, "Failed to drain response body: {e}");
                Vec::new()
            }
        };

        Ok(HttpResponse::new(status, headers, body))
    }
}

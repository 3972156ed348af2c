//! DingTalk robot notifier.

use http::header::{CONTENT_TYPE, HeaderValue};
use tokio_util::sync::CancellationToken;

use crate::alert::Alert;
use crate::template::{AlertGroupView, HandlebarsRenderer, MessageRenderer, RenderedMessage};
use crate::time::{Clock, SystemClock};
use crate::webhook::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::payload::{DingTalkReply, WirePayload};
use super::{DeliveryVerdict, NotificationConfig, NotifyContext, NotifyError, check_status};

/// Trait for delivering an alert group through one channel.
///
/// One call is one attempt. Implementations never retry internally; the
/// returned verdict tells the caller whether another attempt is worthwhile.
pub trait Notifier: Send + Sync {
    /// Delivers the alerts and reports the outcome.
    fn notify(
        &self,
        ctx: &NotifyContext,
        alerts: &[Alert],
    ) -> impl std::future::Future<Output = DeliveryVerdict> + Send;
}

/// Notifier posting markdown messages to a DingTalk robot webhook.
///
/// Every attempt runs render → build payload → build request → send →
/// classify and stops at the first failing stage. Nothing is sent unless
/// both templates rendered.
///
/// # Type Parameters
///
/// - `H`: The HTTP client, built by the host with its TLS/proxy/timeout settings
/// - `R`: The template renderer (defaults to [`HandlebarsRenderer`])
/// - `C`: The clock used to tell firing from resolved alerts (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use dingtalk_notify::notify::{DingTalk, NotificationConfig};
/// use dingtalk_notify::webhook::ReqwestClient;
/// use url::Url;
///
/// let config = NotificationConfig::new(
///     Url::parse("https://oapi.dingtalk.com/robot/send?access_token=abc").unwrap(),
/// )
/// .unwrap();
/// let notifier = DingTalk::new(config, ReqwestClient::new());
/// ```
#[derive(Debug)]
pub struct DingTalk<H, R = HandlebarsRenderer, C = SystemClock> {
    config: NotificationConfig,
    client: H,
    renderer: R,
    clock: C,
}

impl<H> DingTalk<H> {
    /// Creates a notifier with the Handlebars renderer and the system clock.
    #[must_use]
    pub fn new(config: NotificationConfig, client: H) -> Self {
        Self {
            config,
            client,
            renderer: HandlebarsRenderer::new(),
            clock: SystemClock,
        }
    }
}

impl<H, R, C> DingTalk<H, R, C> {
    /// Replaces the template renderer.
    #[must_use]
    pub fn with_renderer<R2>(self, renderer: R2) -> DingTalk<H, R2, C> {
        DingTalk {
            config: self.config,
            client: self.client,
            renderer,
            clock: self.clock,
        }
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> DingTalk<H, R, C2> {
        DingTalk {
            config: self.config,
            client: self.client,
            renderer: self.renderer,
            clock,
        }
    }

    /// Returns the channel configuration.
    #[must_use]
    pub const fn config(&self) -> &NotificationConfig {
        &self.config
    }
}

impl<H: HttpClient, R: MessageRenderer, C: Clock> DingTalk<H, R, C> {
    /// Renders title and text for the alert group.
    fn render(&self, ctx: &NotifyContext, alerts: &[Alert]) -> Result<RenderedMessage, NotifyError> {
        let view = AlertGroupView::new(
            ctx.receiver(),
            ctx.group_labels(),
            alerts,
            self.clock.now(),
        )
        .with_external_url(ctx.external_url());

        self.renderer
            .render(&view, self.config.title(), self.config.text())
            .map_err(NotifyError::from)
    }

    /// Serializes the payload into a POST request.
    fn build_request(&self, payload: &WirePayload<'_>) -> Result<HttpRequest, NotifyError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| NotifyError::RequestConstruction(e.to_string()))?;

        Ok(HttpRequest::post(self.config.webhook_url().clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(body))
    }

    /// Sends the request, giving up as soon as the caller cancels.
    async fn execute_request(
        &self,
        cancel: &CancellationToken,
        request: HttpRequest,
    ) -> Result<HttpResponse, NotifyError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(NotifyError::Network(HttpError::Cancelled)),
            result = self.client.request(request) => result.map_err(NotifyError::Network),
        }
    }

    async fn deliver(&self, ctx: &NotifyContext, alerts: &[Alert]) -> Result<(), NotifyError> {
        let message = self.render(ctx, alerts)?;
        let request = self.build_request(&WirePayload::markdown(&message))?;
        let response = self.execute_request(ctx.cancellation(), request).await?;

        let status = response.status.as_u16();
        check_status(status, self.config.webhook_url())?;

        if let Some(reply) = DingTalkReply::parse(&response.body).filter(|r| !r.is_ok()) {
            tracing::warn!(
                errcode = reply.errcode,
                errmsg = %reply.errmsg,
                "DingTalk accepted the request but reported an error"
            );
        }

        Ok(())
    }
}

impl<H: HttpClient, R: MessageRenderer, C: Clock> Notifier for DingTalk<H, R, C> {
    async fn notify(&self, ctx: &NotifyContext, alerts: &[Alert]) -> DeliveryVerdict {
        let host = self.config.webhook_url().host_str().unwrap_or_default();
        tracing::debug!(
            receiver = ctx.receiver(),
            alerts = alerts.len(),
            host,
            "Sending DingTalk notification"
        );

        let verdict = DeliveryVerdict::from(self.deliver(ctx, alerts).await);

        match verdict.error() {
            None => tracing::debug!(host, "DingTalk notification delivered"),
            Some(e) => tracing::warn!(
                host,
                retryable = verdict.retryable(),
                "DingTalk notification failed: {e}"
            ),
        }

        verdict
    }
}

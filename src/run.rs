//! Application execution logic.
//!
//! Loads the alert group, builds the HTTP client and makes one delivery
//! attempt, cancelling it if a shutdown signal arrives first.

use std::path::Path;

use thiserror::Error;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use dingtalk_notify::alert::{AlertGroup, AlertsError};
use dingtalk_notify::config::ValidatedConfig;
use dingtalk_notify::notify::{DeliveryVerdict, DingTalk, Notifier};
use dingtalk_notify::webhook::{ClientBuildError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for failures before a delivery attempt is made.
#[derive(Debug, Error)]
pub enum RunError {
    /// The alert group could not be loaded.
    #[error("Failed to load alerts: {0}")]
    Alerts(#[from] AlertsError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] ClientBuildError),
}

/// Executes one notification attempt.
///
/// This function:
/// 1. Loads the alert group from the configured file or stdin
/// 2. Builds the HTTP client from the transport settings
/// 3. Sends the notification, cancelling on Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the alerts cannot be loaded or the client cannot
/// be built. Delivery failures are reported through the verdict.
pub async fn execute(config: ValidatedConfig) -> Result<DeliveryVerdict, RunError> {
    let group = load_alerts(config.alerts.as_deref())?;
    let client = ReqwestClient::from_settings(&config.http)?;

    let token = CancellationToken::new();
    let ctx = config
        .notify_context(&group)
        .with_cancellation(token.clone());
    let notifier = DingTalk::new(config.notification, client);

    tracing::info!(
        receiver = ctx.receiver(),
        alerts = group.alerts.len(),
        "Sending notification"
    );

    let watcher = tokio::spawn(async move {
        shutdown_signal().await;
        tracing::warn!("Shutdown signal received, cancelling delivery");
        token.cancel();
    });

    let verdict = notifier.notify(&ctx, &group.alerts).await;
    watcher.abort();

    Ok(verdict)
}

/// Reads the alert group from `path`, or from stdin when `None`.
fn load_alerts(path: Option<&Path>) -> Result<AlertGroup, AlertsError> {
    match path {
        Some(path) => AlertGroup::load(path),
        None => AlertGroup::read_from(std::io::stdin().lock()),
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

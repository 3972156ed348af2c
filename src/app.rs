//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use dingtalk_notify::config::{ConfigError, field};
use dingtalk_notify::notify::DeliveryVerdict;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration or input error (exit code 1) - invalid args, unreadable alerts, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Delivery failed and retrying will not help (exit code 2).
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn terminal_failure() -> ExitCode {
        ExitCode::from(2)
    }

    /// Delivery failed but a later attempt may succeed (exit code 75, `EX_TEMPFAIL`).
    pub fn retryable_failure() -> ExitCode {
        ExitCode::from(75)
    }
}

/// Maps a delivery verdict to the process exit code.
pub fn verdict_exit_code(verdict: &DeliveryVerdict) -> std::process::ExitCode {
    match (verdict.error(), verdict.retryable()) {
        (None, _) => exit_code::SUCCESS,
        (Some(_), true) => exit_code::retryable_failure(),
        (Some(_), false) => exit_code::terminal_failure(),
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::WEBHOOK_URL => {
            eprintln!("\nRun 'dingtalk-notify init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'dingtalk-notify init' to generate a configuration template.");
        }
        ConfigError::InvalidTemplate { .. } => {
            eprintln!("\nTemplates use Handlebars syntax; check that every block is closed.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

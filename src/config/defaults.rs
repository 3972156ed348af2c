//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default receiver name shown to templates.
pub const RECEIVER: &str = "dingtalk";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

//! Notification layer: delivering one alert group through one channel.
//!
//! This module provides:
//! - The channel abstraction ([`Notifier`]) and the DingTalk implementation ([`DingTalk`])
//! - Channel configuration and per-attempt context ([`NotificationConfig`], [`NotifyContext`])
//! - The DingTalk wire format ([`WirePayload`], [`DingTalkReply`])
//! - Outcome classification ([`classify`], [`check_status`], [`DeliveryVerdict`])
//! - Error handling ([`NotifyError`], [`UnsupportedScheme`])
//!
//! # Retry semantics
//!
//! | Outcome                               | Retryable |
//! |---------------------------------------|-----------|
//! | Template failed to render             | no        |
//! | Request could not be built            | no        |
//! | Connection, DNS, timeout, cancelled   | yes       |
//! | Status 2xx                            | (success) |
//! | Status 5xx                            | yes       |
//! | Any other status                      | no        |

mod config;
mod dingtalk;
mod error;
mod payload;
mod verdict;


pub use config::{NotificationConfig, NotifyContext};
pub use dingtalk::{DingTalk, Notifier};
pub use error::{NotifyError, UnsupportedScheme};
pub use payload::{DingTalkReply, WirePayload};
pub use verdict::{DeliveryVerdict, check_status, classify};

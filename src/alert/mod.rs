//! Alert layer: the alerts a notification is about.
//!
//! This module provides:
//! - Alert value types ([`Alert`], [`AlertStatus`], [`LabelSet`])
//! - Alert group input parsing ([`AlertGroup`])
//! - Error handling ([`AlertsError`])

mod error;
mod group;
mod model;

#[cfg(test)]
mod group_tests;

pub use error::AlertsError;
pub use group::AlertGroup;
pub use model::{Alert, AlertStatus, LabelSet};

//! Time abstraction for testability.
//!
//! Alert status (firing vs. resolved) depends on "now", so the notifier
//! reads the current time through a [`Clock`] that tests can replace.

use chrono::{DateTime, Utc};

/// Abstraction over wall-clock time.
///
/// # Example
///
/// ```
/// use dingtalk_notify::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// assert!(clock.now().timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock using the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
///
/// Useful for deterministic rendering (tests, replaying a stored group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

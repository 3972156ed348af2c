//! dingtalk-notify: DingTalk robot notifications for alert groups
//!
//! A library for rendering a group of alerts into a DingTalk markdown
//! message, delivering it with one HTTP attempt, and classifying the outcome
//! as success, retryable failure or terminal failure.

pub mod alert;
pub mod config;
pub mod notify;
pub mod template;
pub mod time;
pub mod webhook;

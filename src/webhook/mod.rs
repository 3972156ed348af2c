//! Webhook transport layer for sending HTTP requests to external services.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`], [`ClientSettings`])
//! - Transport error classification ([`HttpError`], [`IsRetryable`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::{ClientBuildError, ClientSettings, ReqwestClient};
pub use error::{HttpError, IsRetryable};
pub use http::{HttpClient, HttpRequest, HttpResponse};

//! Transport layer for outbound Pearl API requests.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Retry decisions and backoff ([`RetryPolicy`], [`RetryConfig`])
//! - Request dispatch with retries (the crate-internal `Transport`)

mod client;
mod error;
mod http;
mod retry;
mod send;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{ApiError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use retry::{RetryConfig, RetryPolicy};
pub(crate) use send::Transport;

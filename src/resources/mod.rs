//! Pearl API resources, grouped the way the API groups its endpoints.
//!
//! Resources are short-lived views borrowed from a
//! [`PearlClient`](crate::PearlClient); they hold no state of their own.

mod chat;
mod webhooks;

#[cfg(test)]
mod chat_tests;

pub use chat::{Chat, CompletionParams};
pub use webhooks::Webhooks;

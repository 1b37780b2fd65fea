//! Pearl SDK: client for the Pearl AI chat and webhook API.
//!
//! A library for sending chat-completion requests, managing webhook
//! endpoints, and verifying inbound webhook signatures, with transparent
//! retry of transient failures.
//!
//! # Quick start
//!
//! ```no_run
//! use pearl_sdk::{ChatMessage, ClientConfig, PearlClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PearlClient::new(ClientConfig::new("your-api-key"))?;
//!
//! let response = client
//!     .chat()
//!     .send_completion(vec![ChatMessage::user("Hello")], "session-1")
//!     .await?;
//! println!("{:?}", response.choices.first());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod resources;
pub mod signature;
pub mod time;
pub mod transport;
pub mod types;

#[cfg(test)]
mod signature_tests;

pub use client::PearlClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use resources::{Chat, CompletionParams, Webhooks};
pub use signature::{
    SIGNATURE_HEADER, ValidationError, compute_signature, verify_signature,
};
pub use transport::{
    ApiError, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestClient, RetryConfig,
    RetryPolicy,
};
pub use types::{
    ChatCompletionChoice, ChatCompletionResponse, ChatCompletionResponseMessage, ChatMessage,
    ConversationMode, DEFAULT_MODEL, ExpertInfo, ProblemDetails, Role, WebhookEndpointRequest,
    WebhookPayload,
};

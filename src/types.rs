//! Wire types for the Pearl API.
//!
//! Request types serialize to the exact shapes the API expects; response
//! types deserialize liberally, accepting both the camelCase spellings the
//! API documents and their snake_case equivalents, ignoring unknown fields,
//! and defaulting absent ones.

use serde::{Deserialize, Serialize};

/// Default model for chat completion requests.
pub const DEFAULT_MODEL: &str = "pearl-ai";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation.
    System,
    /// The end user.
    User,
    /// The AI (or expert) responding.
    Assistant,
}

/// A single message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Conversation mode for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationMode {
    /// AI-only responses.
    #[default]
    PearlAi,
    /// AI responses with expert verification.
    PearlAiVerified,
    /// AI responses with expert transition.
    PearlAiExpert,
    /// Direct expert connection.
    Expert,
}

/// Request payload for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    /// Model to use.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Session routing metadata.
    pub metadata: RequestMetadata,
}

/// Session metadata attached to a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMetadata {
    /// Conversation mode.
    pub mode: ConversationMode,
    /// Unique identifier for the chat session.
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Information about the expert behind a response or webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ExpertInfo {
    /// Expert display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Short description of the expert's occupation.
    #[serde(rename = "jobDescription", alias = "job_description", default)]
    pub job_description: Option<String>,
    /// Avatar image URL.
    #[serde(rename = "avatarUrl", alias = "avatar_url", default)]
    pub avatar_url: Option<String>,
}

/// An assistant message inside a chat completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatCompletionResponseMessage {
    /// Whether a human expert produced the message.
    #[serde(rename = "isHuman", alias = "is_human", default)]
    pub is_human: bool,
    /// Expert details when a human was involved.
    #[serde(rename = "expertInfo", alias = "expert_info", default)]
    pub expert_info: Option<ExpertInfo>,
    /// Author role, `assistant` when absent.
    #[serde(default = "default_assistant_role")]
    pub role: Role,
    /// Message text.
    #[serde(default)]
    pub content: Option<String>,
}

impl Default for ChatCompletionResponseMessage {
    fn default() -> Self {
        Self {
            is_human: false,
            expert_info: None,
            role: Role::Assistant,
            content: None,
        }
    }
}

const fn default_assistant_role() -> Role {
    Role::Assistant
}

/// One generated response in a chat completion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatCompletionChoice {
    /// Position of this choice in the response.
    #[serde(default)]
    pub index: u32,
    /// The generated message.
    #[serde(default)]
    pub message: ChatCompletionResponseMessage,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: String,
}

/// Response payload of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion identifier.
    #[serde(default)]
    pub id: String,
    /// Generated choices.
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    /// Creation time (Unix seconds).
    #[serde(default)]
    pub created: u64,
    /// Question identifier, when the session is tied to one.
    #[serde(rename = "questionId", alias = "question_id", default)]
    pub question_id: Option<String>,
    /// User identifier, when known.
    #[serde(rename = "userId", alias = "user_id", default)]
    pub user_id: Option<String>,
}

/// Detailed problem information inside an API error response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProblemDetails {
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Error category.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Offending request parameter, when applicable.
    #[serde(default)]
    pub param: Option<String>,
    /// Any further properties the server included.
    #[serde(flatten)]
    pub additional_properties: serde_json::Map<String, serde_json::Value>,
}

/// Full error response from the API, wrapping [`ProblemDetails`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProblemDetailsResponse {
    /// The problem details.
    pub error: ProblemDetails,
}

/// Payload of an inbound webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookPayload {
    /// Delivery identifier.
    pub id: String,
    /// Chat session the message belongs to.
    #[serde(rename = "sessionId", alias = "session_id")]
    pub session_id: String,
    /// Message text.
    pub message: String,
    /// When the message was produced.
    #[serde(rename = "messageDateTime", alias = "message_date_time")]
    pub message_date_time: String,
    /// Expert that produced the message.
    #[serde(default)]
    pub expert: ExpertInfo,
}

/// Request payload for registering or updating a webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointRequest {
    /// Publicly reachable URL that should receive deliveries.
    pub endpoint: String,
}

impl WebhookEndpointRequest {
    /// Creates a request for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

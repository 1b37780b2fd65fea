//! Chat completion resource.

use crate::time::Sleeper;
use crate::transport::{ApiError, HttpClient, Transport};
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ConversationMode, DEFAULT_MODEL,
    RequestMetadata,
};

/// Optional knobs for a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionParams {
    /// Conversation mode. Defaults to [`ConversationMode::PearlAi`].
    pub mode: ConversationMode,
    /// Model name. Defaults to [`DEFAULT_MODEL`].
    pub model: String,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            mode: ConversationMode::default(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Chat operations, reached via [`PearlClient::chat`](crate::PearlClient::chat).
#[derive(Debug, Clone, Copy)]
pub struct Chat<'a, H, S> {
    transport: &'a Transport<H, S>,
}

impl<'a, H, S> Chat<'a, H, S> {
    pub(crate) const fn new(transport: &'a Transport<H, S>) -> Self {
        Self { transport }
    }
}

impl<H: HttpClient, S: Sleeper> Chat<'_, H, S> {
    /// Sends a chat completion request with the default mode and model.
    ///
    /// Maps to `POST /chat/completions`. The primary entry point for
    /// generating responses, conversational or otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the transport fails, the server answers
    /// with a terminal non-success status, or the response body cannot be
    /// decoded.
    pub async fn send_completion(
        &self,
        messages: Vec<ChatMessage>,
        session_id: impl Into<String>,
    ) -> Result<ChatCompletionResponse, ApiError> {
        self.send_completion_with(messages, session_id, CompletionParams::default())
            .await
    }

    /// Sends a chat completion request with explicit mode and model.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`send_completion`](Self::send_completion).
    pub async fn send_completion_with(
        &self,
        messages: Vec<ChatMessage>,
        session_id: impl Into<String>,
        params: CompletionParams,
    ) -> Result<ChatCompletionResponse, ApiError> {
        let request = ChatCompletionRequest {
            model: params.model,
            messages,
            metadata: RequestMetadata {
                mode: params.mode,
                session_id: session_id.into(),
            },
        };

        self.transport
            .execute_json(http::Method::POST, "/chat/completions", &request)
            .await
    }
}

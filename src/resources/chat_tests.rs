//! Tests for the `Chat` resource.

use std::sync::Arc;
use std::sync::Mutex;

use serde_json::json;

use crate::client::PearlClient;
use crate::config::ClientConfig;
use crate::resources::CompletionParams;
use crate::time::InstantSleeper;
use crate::transport::{ApiError, HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::types::{ChatMessage, ConversationMode};

/// Mock HTTP client that returns a scripted sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn replying(status: http::StatusCode, body: &[u8]) -> Arc<Self> {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.to_vec(),
        ))])
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

fn client(http: Arc<MockClient>) -> PearlClient<Arc<MockClient>, InstantSleeper> {
    PearlClient::with_http_client(http, ClientConfig::new("test-key"))
        .unwrap()
        .with_sleeper(InstantSleeper)
}

fn completion_body() -> Vec<u8> {
    json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": {
                "isHuman": false,
                "expertInfo": null,
                "role": "assistant",
                "content": "Mocked assistant response."
            },
            "finish_reason": "stop"
        }],
        "created": 1_678_886_400
    })
    .to_string()
    .into_bytes()
}

#[tokio::test]
async fn send_completion_posts_wire_shape_to_completions_path() {
    let http = MockClient::replying(http::StatusCode::OK, &completion_body());
    let client = client(Arc::clone(&http));

    client
        .chat()
        .send_completion(vec![ChatMessage::user("Test message")], "test-session-123")
        .await
        .unwrap();

    let requests = http.captured_requests();
    let request = &requests[0];
    assert_eq!(request.method, http::Method::POST);
    assert_eq!(
        request.url.as_str(),
        "https://api.pearl.com/api/v1/chat/completions"
    );

    let body: serde_json::Value =
        serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "model": "pearl-ai",
            "messages": [{"role": "user", "content": "Test message"}],
            "metadata": {"mode": "pearl-ai", "sessionId": "test-session-123"}
        })
    );
}

#[tokio::test]
async fn send_completion_parses_the_response() {
    let http = MockClient::replying(http::StatusCode::OK, &completion_body());
    let client = client(http);

    let response = client
        .chat()
        .send_completion(vec![ChatMessage::user("Test message")], "test-session-123")
        .await
        .unwrap();

    assert_eq!(response.id, "chatcmpl-test");
    assert_eq!(response.choices.len(), 1);
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("Mocked assistant response.")
    );
    assert!(!response.choices[0].message.is_human);
}

#[tokio::test]
async fn send_completion_with_overrides_mode_and_model() {
    let http = MockClient::replying(http::StatusCode::OK, &completion_body());
    let client = client(Arc::clone(&http));

    client
        .chat()
        .send_completion_with(
            vec![ChatMessage::user("Test message")],
            "test-session-123",
            CompletionParams {
                mode: ConversationMode::Expert,
                model: "test-model".to_string(),
            },
        )
        .await
        .unwrap();

    let body: serde_json::Value =
        serde_json::from_slice(http.captured_requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["metadata"]["mode"], "expert");
}

#[tokio::test]
async fn api_errors_surface_unchanged() {
    let http = MockClient::replying(
        http::StatusCode::UNAUTHORIZED,
        br#"{"error":{"message":"bad key"}}"#,
    );
    let client = client(http);

    let error = client
        .chat()
        .send_completion(vec![ChatMessage::user("hi")], "s1")
        .await
        .unwrap_err();

    match error {
        ApiError::Status { status, error, .. } => {
            assert_eq!(status, http::StatusCode::UNAUTHORIZED);
            assert_eq!(error.unwrap().message, "bad key");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_errors_surface_unchanged() {
    let http = MockClient::new(vec![Err(HttpError::Timeout)]);
    let client = client(http);

    let error = client
        .chat()
        .send_completion(vec![ChatMessage::user("hi")], "s1")
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Http(HttpError::Timeout)));
}

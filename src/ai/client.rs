//! Chat-completion transport
//!
//! The engine only sees the [`ChatTransport`] trait. [`HttpTransport`] talks
//! to an OpenAI-compatible endpoint with a blocking reqwest client;
//! [`ScriptedTransport`] replays canned replies for tests.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

use super::credential::ApiKey;
use super::error::EngineError;
use crate::config::AiSettings;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the model
    System,
    /// End-user input
    User,
}

/// One message of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author
    pub role: Role,
    /// Text
    pub content: String,
}

impl ChatMessage {
    /// System message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// User message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for the chat-completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation so far
    pub messages: Vec<ChatMessage>,
    /// Upper bound on reply length
    pub max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
    }
}

/// Pull a human-readable message out of an error body
///
/// Understands `{"error": {"message": ...}}`, `{"error": "..."}` and
/// `{"message": ...}`.
pub fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message").or(Some(e)))
        .and_then(|m| m.as_str())
        .or_else(|| value.get("message").and_then(|m| m.as_str()))
        .map(str::to_string)
}

/// Something that can answer a chat request
pub trait ChatTransport {
    /// Send `request` authenticated with `key` and return the reply text
    fn complete(&self, key: &ApiKey, request: &ChatRequest) -> Result<String, EngineError>;
}

/// Transport over HTTPS using a blocking reqwest client
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a client for the configured endpoint
    ///
    /// Without `timeout-secs` the reqwest default applies.
    pub fn new(settings: &AiSettings) -> Result<Self, EngineError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(format!("heating-advisor/{}", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| EngineError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl ChatTransport for HttpTransport {
    fn complete(&self, key: &ApiKey, request: &ChatRequest) -> Result<String, EngineError> {
        log::debug!(
            "POST {} (model {}, {} messages)",
            self.endpoint,
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(key.expose())
            .json(request)
            .send()
            .map_err(|e| EngineError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = api_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(EngineError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| EngineError::InvalidResponse(e.to_string()))?;
        body.into_content().ok_or(EngineError::EmptyResponse)
    }
}

/// Transport that replays queued replies and records every request
///
/// The last queued reply repeats once the queue is down to one entry.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, EngineError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedTransport {
    /// Create a transport with pre-defined replies
    pub fn new(replies: Vec<Result<String, EngineError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Always fail with `error`
    pub fn failing(error: EngineError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl ChatTransport for ScriptedTransport {
    fn complete(&self, _key: &ApiKey, request: &ChatRequest) -> Result<String, EngineError> {
        self.requests.lock().push(request.clone());

        let mut replies = self.replies.lock();
        match replies.len() {
            0 => Err(EngineError::EmptyResponse),
            1 => replies[0].clone(),
            _ => replies.pop_front().unwrap_or(Err(EngineError::EmptyResponse)),
        }
    }
}

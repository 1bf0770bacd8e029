//! Gleaner LLM Backend Layer
//!
//! Implementations of the `ChatClient` trait from `gleaner-domain`.
//!
//! # Backends
//!
//! - `OpenAiChatClient`: any OpenAI-compatible `/chat/completions` endpoint.
//!   Both model roles in the pipeline speak this shape: hosted providers for
//!   extraction, and a local Ollama instance (which serves the same API) for
//!   fact checking.
//! - `MockChatClient`: deterministic mock for testing, with a scripted
//!   response queue and request recording.
//!
//! # Examples
//!
//! ```
//! use gleaner_llm::MockChatClient;
//! use gleaner_domain::{ChatClient, ChatRequest};
//!
//! # async fn example() {
//! let client = MockChatClient::new("Hello from the model");
//! let reply = client.complete(ChatRequest::new("hi")).await.unwrap();
//! assert_eq!(reply, "Hello from the model");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use gleaner_domain::{ChatClient, ChatError, ChatRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub use openai::OpenAiChatClient;

/// Deterministic chat backend for testing.
///
/// Returns scripted responses in order, falling back to a fixed default when
/// the script is exhausted, and records every request it receives so tests
/// can assert on prompts (e.g. that regeneration guidance reached the
/// model).
#[derive(Debug, Clone)]
pub struct MockChatClient {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatClient {
    /// Create a mock that answers every request with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response to be returned before the default kicks in.
    pub fn push_response(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue a communication error.
    pub fn push_error(&self, message: impl Into<String>) {
        self.script.lock().unwrap().push_back(Err(message.into()));
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError> {
        self.requests.lock().unwrap().push(request);

        let scripted = self.script.lock().unwrap().pop_front();
        match scripted {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ChatError::Communication(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}

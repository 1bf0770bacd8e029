//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the orchestration core and
//! infrastructure. Production adapters (HTTP clients, file stores) live in
//! other crates; tests substitute deterministic stubs.

use crate::dataset::Dataset;
use crate::document::SourceDocument;
use crate::point::KeyPoint;
use crate::verdict::VerificationVerdict;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from a chat-completion backend.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Network or API communication error
    #[error("communication error: {0}")]
    Communication(String),

    /// The backend answered, but not in a usable shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available at the endpoint
    #[error("model not available: {0}")]
    ModelNotAvailable(String),
}

/// One chat-completion request: "send text, receive text".
///
/// The core does not depend on any particular wire protocol beyond this.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Optional system/instruction message.
    pub system: Option<String>,

    /// The user message (typically the document text or a verification
    /// prompt).
    pub user: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus-sampling parameter, when the backend supports it.
    pub top_p: Option<f32>,
}

impl ChatRequest {
    /// Create a request with just a user message.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
            temperature: 0.2,
            top_p: None,
        }
    }

    /// Set the system message.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the nucleus-sampling parameter.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// A chat-completion-style model backend.
///
/// Implemented by the infrastructure layer (gleaner-llm).
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a request and return the model's text response.
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError>;
}

/// Extracts candidate key points from a source document.
///
/// `guidance`, when present, is additional instruction text used on
/// regeneration attempts; it is absent on the first attempt. Failure here is
/// fatal to the attempt: an empty or corrupt extraction cannot be
/// meaningfully verified, so errors are surfaced rather than swallowed.
#[async_trait]
pub trait KeyPointExtractor: Send + Sync {
    /// Extract an ordered sequence of key points from the document.
    async fn extract(
        &self,
        source: &SourceDocument,
        guidance: Option<&str>,
    ) -> Result<Vec<KeyPoint>, ChatError>;
}

/// Checks a single candidate statement against a source document.
///
/// Infallible by contract: a transport or malformed-response failure yields
/// an Uncertain verdict rather than an error, so one bad network call cannot
/// abort a whole verification batch.
#[async_trait]
pub trait FactChecker: Send + Sync {
    /// Return a verdict for `statement` against `source`.
    async fn check(&self, source: &SourceDocument, statement: &str) -> VerificationVerdict;
}

/// Retrieves article content from the outside world.
///
/// Implemented by the infrastructure layer (gleaner-fetch).
#[async_trait]
pub trait ContentFetcher {
    /// Error type for fetch operations
    type Error;

    /// Fetch the readable text at `url` as a source document.
    async fn fetch(&self, url: &str) -> Result<SourceDocument, Self::Error>;
}

/// Stores and retrieves datasets.
///
/// Implemented by the infrastructure layer (gleaner-dataset). Write
/// discipline (backup rotation, atomicity) belongs to the implementation.
pub trait DatasetStore {
    /// Error type for store operations
    type Error;

    /// Load a dataset, returning an empty one when nothing is stored yet.
    fn load(&self, path: &Path) -> Result<Dataset, Self::Error>;

    /// Save a dataset, optionally backing up the previous version first.
    fn save(&self, dataset: &Dataset, path: &Path, backup: bool) -> Result<(), Self::Error>;
}

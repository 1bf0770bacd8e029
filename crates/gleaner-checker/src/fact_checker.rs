//! Single-statement fact checking against a verification model

use crate::config::CheckerConfig;
use async_trait::async_trait;
use gleaner_domain::{
    ChatClient, ChatRequest, Consistency, FactChecker, SourceDocument, VerificationVerdict,
};
use tracing::{debug, warn};

/// Fact checker backed by a chat-completion verification model.
///
/// Builds a Document/Claim prompt (the format consistency-checking models
/// such as Bespoke-MiniCheck expect) and maps the response's leading signal
/// to a verdict. Transport failures and unparseable responses become
/// Uncertain verdicts rather than errors, so one bad call never aborts a
/// verification batch.
pub struct ChatFactChecker<C: ChatClient> {
    client: C,
    config: CheckerConfig,
}

impl<C: ChatClient> ChatFactChecker<C> {
    /// Create a fact checker over the given chat backend.
    pub fn new(client: C, config: CheckerConfig) -> Self {
        Self { client, config }
    }

    /// Create a fact checker with default configuration.
    pub fn default_config(client: C) -> Self {
        Self::new(client, CheckerConfig::default())
    }

    fn truncated_source(&self, text: &str) -> String {
        if text.chars().count() <= self.config.max_document_chars {
            return text.to_string();
        }
        let mut truncated: String = text
            .chars()
            .take(self.config.max_document_chars.saturating_sub(3))
            .collect();
        truncated.push_str("...");
        truncated
    }

    fn build_prompt(&self, source: &SourceDocument, statement: &str) -> String {
        format!(
            "Document: {}\n\nClaim: {}\n\nIs this claim consistent with the document?",
            self.truncated_source(source.text()),
            statement
        )
    }
}

/// Map a verification model's free-text response to a consistency signal.
///
/// Checks the leading token only: consistency checkers answer "Yes" or "No"
/// first, sometimes followed by reasoning. Anything else is an ambiguous
/// signal and classifies as Uncertain.
fn parse_signal(response: &str) -> Consistency {
    let lowered = response.trim().to_lowercase();
    if lowered.starts_with("yes") {
        Consistency::Consistent
    } else if lowered.starts_with("no") {
        Consistency::Inconsistent
    } else {
        Consistency::Uncertain
    }
}

#[async_trait]
impl<C: ChatClient> FactChecker for ChatFactChecker<C> {
    async fn check(&self, source: &SourceDocument, statement: &str) -> VerificationVerdict {
        if statement.trim().is_empty() {
            return VerificationVerdict::uncertain("statement is empty", None);
        }

        let request = ChatRequest::new(self.build_prompt(source, statement))
            .with_temperature(self.config.temperature);

        match self.client.complete(request).await {
            Ok(response) => {
                let signal = parse_signal(&response);
                debug!(source = %source.id(), %signal, "verified statement");
                VerificationVerdict {
                    consistency: signal,
                    explanation: response.clone(),
                    raw_response: Some(response),
                }
            }
            Err(e) => {
                warn!(source = %source.id(), error = %e, "fact-check call failed, recording uncertain");
                VerificationVerdict::uncertain(format!("Error: {}", e), None)
            }
        }
    }
}

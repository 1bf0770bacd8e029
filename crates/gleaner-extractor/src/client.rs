//! Key-point extraction over a chat backend

use crate::parser::{clean_references, parse_key_points};
use crate::prompt::build_system_prompt;
use async_trait::async_trait;
use gleaner_domain::{ChatClient, ChatError, ChatRequest, KeyPoint, KeyPointExtractor, SourceDocument};
use tracing::{debug, info};

/// Sampling temperature for extraction; low enough to stay factual.
const EXTRACTION_TEMPERATURE: f32 = 0.2;
const EXTRACTION_TOP_P: f32 = 0.9;

/// `KeyPointExtractor` backed by a chat-completion generation model.
///
/// Sends the article as the user message with the extraction instructions
/// (plus any regeneration guidance) as the system message, then cleans and
/// parses the response into discrete points. Any failure, including a
/// response with no parseable points, is surfaced: a failed extraction is
/// fatal to its attempt.
pub struct ChatKeyPointExtractor<C: ChatClient> {
    client: C,
}

impl<C: ChatClient> ChatKeyPointExtractor<C> {
    /// Create an extractor over the given chat backend.
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ChatClient> KeyPointExtractor for ChatKeyPointExtractor<C> {
    async fn extract(
        &self,
        source: &SourceDocument,
        guidance: Option<&str>,
    ) -> Result<Vec<KeyPoint>, ChatError> {
        info!(source = %source.id(), regeneration = guidance.is_some(), "extracting key points");

        let request = ChatRequest::new(source.text())
            .with_system(build_system_prompt(guidance))
            .with_temperature(EXTRACTION_TEMPERATURE)
            .with_top_p(EXTRACTION_TOP_P);

        let raw = self.client.complete(request).await?;
        debug!(chars = raw.len(), "extraction response received");

        let cleaned = clean_references(&raw);
        let points = parse_key_points(&cleaned);
        if points.is_empty() {
            return Err(ChatError::InvalidResponse(
                "no key points in model response".to_string(),
            ));
        }

        info!(points = points.len(), "parsed key points");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_llm::MockChatClient;

    fn doc() -> SourceDocument {
        SourceDocument::new("doc-1", "Article text here.").unwrap()
    }

    #[tokio::test]
    async fn test_extracts_and_cleans_points() {
        let client = MockChatClient::new(
            "Here are the key points of the article:\n* First finding [1]\n* Second finding (Source: BBC)",
        );
        let extractor = ChatKeyPointExtractor::new(client);

        let points = extractor.extract(&doc(), None).await.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].text(), "First finding");
        assert_eq!(points[1].text(), "Second finding");
    }

    #[tokio::test]
    async fn test_guidance_reaches_the_system_prompt() {
        let client = MockChatClient::new("* A point");
        let extractor = ChatKeyPointExtractor::new(client.clone());

        extractor
            .extract(&doc(), Some("Do not repeat: the moon is square."))
            .await
            .unwrap();

        let request = &client.requests()[0];
        let system = request.system.as_deref().unwrap();
        assert!(system.contains("the moon is square"));
        assert_eq!(request.user, "Article text here.");
        assert_eq!(request.top_p, Some(EXTRACTION_TOP_P));
    }

    #[tokio::test]
    async fn test_transport_failure_is_fatal() {
        let client = MockChatClient::default();
        client.push_error("connection refused");
        let extractor = ChatKeyPointExtractor::new(client);

        let result = extractor.extract(&doc(), None).await;
        assert!(matches!(result, Err(ChatError::Communication(_))));
    }

    #[tokio::test]
    async fn test_pointless_response_is_fatal() {
        let client = MockChatClient::new("Here are the key points of the article:\n\n");
        let extractor = ChatKeyPointExtractor::new(client);

        let result = extractor.extract(&doc(), None).await;
        assert!(matches!(result, Err(ChatError::InvalidResponse(_))));
    }
}

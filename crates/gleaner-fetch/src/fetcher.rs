//! HTTP article retrieval

use crate::html::extract_text;
use async_trait::async_trait;
use gleaner_domain::{ContentFetcher, SourceDocument};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Some publishers refuse requests without a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from fetching an article.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or completed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status {
        /// The URL that was requested
        url: String,
        /// The status the server answered with
        status: StatusCode,
    },

    /// The page yielded no readable text after extraction
    #[error("no readable content at {0}")]
    EmptyContent(String),
}

/// Fetches a web page and reduces it to readable article text.
///
/// The resulting [`SourceDocument`] uses the URL as its id, so dataset
/// entries and log lines can always be traced back to their source.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with a browser user agent and a 30-second timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for PageFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<SourceDocument, FetchError> {
        info!(url, "fetching article");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "page downloaded");

        let text = extract_text(&body);
        SourceDocument::new(url, text).map_err(|_| FetchError::EmptyContent(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_a_request_error() {
        let fetcher = PageFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/article").await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[test]
    fn test_construction_succeeds() {
        assert!(PageFetcher::new().is_ok());
    }
}

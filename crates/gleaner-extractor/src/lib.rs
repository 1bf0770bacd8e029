//! Gleaner Extractor
//!
//! Extracts bullet-point key points from articles with a generation LLM and
//! drives the verification-and-regeneration loop.
//!
//! # Architecture
//!
//! ```text
//! SourceDocument → Orchestrator → Extractor → candidate points
//!                       │                          │
//!                       │              PointVerifier → per-point verdicts
//!                       │                          │
//!                       └── decide: accept / retry with guidance / give up
//! ```
//!
//! # Key Features
//!
//! - **Tolerant bullet parsing**: varying markers, reference cleanup, no
//!   silent merging or splitting beyond line-based segmentation
//! - **Bounded regeneration**: inaccurate points trigger a re-prompt with
//!   guidance, up to `max_attempts` total attempts
//! - **Audit trail**: every attempt's points and report are retained in the
//!   final result, and attached to errors when a run aborts
//!
//! # Example Usage
//!
//! ```no_run
//! use gleaner_extractor::{ChatKeyPointExtractor, Orchestrator, RunConfig};
//! use gleaner_checker::{ChatFactChecker, PointVerifier};
//! use gleaner_llm::OpenAiChatClient;
//! use gleaner_domain::SourceDocument;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ChatKeyPointExtractor::new(
//!     OpenAiChatClient::new("https://api.openai.com/v1", "gpt-3.5-turbo"),
//! );
//! let verifier = PointVerifier::new(ChatFactChecker::default_config(
//!     OpenAiChatClient::new("http://localhost:11434/v1", "bespoke-minicheck"),
//! ));
//!
//! let config = RunConfig { auto_check: true, max_attempts: 2 };
//! let orchestrator = Orchestrator::new(extractor, verifier, config)?;
//!
//! let source = SourceDocument::new("https://example.com/a", "Article text...")?;
//! let outcome = orchestrator.run(&source).await?;
//!
//! println!("{}", outcome.key_points);
//! println!("attempts: {}", outcome.attempts.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod orchestrator;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use client::ChatKeyPointExtractor;
pub use config::RunConfig;
pub use error::OrchestrationError;
pub use orchestrator::Orchestrator;
pub use parser::{clean_references, parse_key_points, split_sentences};
pub use types::{ExtractionAttempt, ExtractionOutcome};

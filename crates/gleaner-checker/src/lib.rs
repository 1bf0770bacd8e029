//! Gleaner Checker
//!
//! Fact-checks extracted key points against their source document.
//!
//! The checker provides:
//! - `ChatFactChecker`: per-statement verdicts from a verification model
//!   (Document/Claim prompt, Yes/No parsing, fail-open to Uncertain)
//! - `PointVerifier`: assembles per-point verdicts into an ordered,
//!   partitioned `VerificationReport`
//!
//! # Examples
//!
//! ```no_run
//! use gleaner_checker::{ChatFactChecker, CheckerConfig, PointVerifier};
//! use gleaner_llm::OpenAiChatClient;
//!
//! let client = OpenAiChatClient::new("http://localhost:11434/v1", "bespoke-minicheck");
//! let checker = ChatFactChecker::new(client, CheckerConfig::default());
//! let verifier = PointVerifier::new(checker);
//! ```

#![warn(missing_docs)]

mod config;
mod fact_checker;
mod verifier;

pub use config::CheckerConfig;
pub use fact_checker::ChatFactChecker;
pub use verifier::{PointVerifier, VerificationCancelled};

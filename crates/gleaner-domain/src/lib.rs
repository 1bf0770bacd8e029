//! Gleaner Domain Layer
//!
//! Core entities and trait interfaces for the key-point dataset curation
//! pipeline. Everything that is persisted or passed across crate boundaries
//! is defined here; infrastructure implementations (HTTP clients, file
//! stores, fetchers) live in the other crates.
//!
//! ## Key Concepts
//!
//! - **SourceDocument**: an article's text plus an identifier, read-only to
//!   the pipeline
//! - **KeyPoint**: a single extracted statement, ephemeral within one run
//! - **VerificationVerdict**: the fact-checker's judgement of one point
//!   (consistent / inconsistent / uncertain) with its explanation and raw
//!   model response
//! - **VerificationReport**: per-point verdicts partitioned into accurate,
//!   inaccurate, and uncertain categories
//! - **DatasetEntry / Dataset**: the persisted (article, key-points) records
//!
//! ## Architecture
//!
//! Trait seams (`ChatClient`, `KeyPointExtractor`, `FactChecker`,
//! `ContentFetcher`, `DatasetStore`) keep the orchestration core testable
//! against deterministic stubs with no network or filesystem access.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cancel;
pub mod dataset;
pub mod document;
pub mod entry;
pub mod point;
pub mod report;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use cancel::CancelHandle;
pub use dataset::{Dataset, DatasetStats, ShareGptConversation, ShareGptMessage};
pub use document::SourceDocument;
pub use entry::DatasetEntry;
pub use point::KeyPoint;
pub use report::{VerificationReport, VerifiedPoint};
pub use traits::{ChatClient, ChatError, ChatRequest, ContentFetcher, DatasetStore, FactChecker, KeyPointExtractor};
pub use verdict::{Consistency, VerificationVerdict};

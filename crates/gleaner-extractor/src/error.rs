//! Error types for extraction and orchestration

use crate::types::ExtractionAttempt;
use gleaner_domain::ChatError;
use thiserror::Error;

/// Errors that abort an orchestration run.
///
/// Verification uncertainty and retry exhaustion are *not* errors: they are
/// absorbed into the `ExtractionOutcome` so batch processing can continue
/// past degraded entries. Only generation failures, cancellation, and
/// invalid configuration surface here.
#[derive(Error, Debug)]
pub enum OrchestrationError {
    /// The generation model failed to produce points. Fatal to the run; the
    /// attempts completed before the failure remain attached for
    /// diagnostics.
    #[error("generation failed on attempt {attempt}: {source}")]
    Generation {
        /// Attempt number on which generation failed (1-based).
        attempt: u32,
        /// The underlying client failure.
        source: ChatError,
        /// Attempts completed before the failure.
        attempts: Vec<ExtractionAttempt>,
    },

    /// The run was cancelled at a suspension-point boundary.
    #[error("run cancelled after {} completed attempts", attempts.len())]
    Cancelled {
        /// Attempts completed before cancellation was observed.
        attempts: Vec<ExtractionAttempt>,
    },

    /// Invalid run configuration, rejected before orchestration starts.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl OrchestrationError {
    /// The attempt history completed before the run aborted, for
    /// diagnostics. Empty for configuration errors.
    pub fn attempts(&self) -> &[ExtractionAttempt] {
        match self {
            OrchestrationError::Generation { attempts, .. } => attempts,
            OrchestrationError::Cancelled { attempts } => attempts,
            OrchestrationError::Config(_) => &[],
        }
    }
}

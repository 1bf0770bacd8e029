//! Checker configuration

/// Configuration for fact checking.
///
/// Concurrency is not configured here: the number of points checked at once
/// is a property of [`crate::PointVerifier`], set via
/// `with_parallel_checks`.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum source-document characters included in a verification prompt.
    /// Longer documents are truncated with a trailing ellipsis to fit the
    /// verification model's context window.
    pub max_document_chars: usize,

    /// Sampling temperature for verification calls. Kept low for
    /// deterministic verdicts.
    pub temperature: f32,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_document_chars: 6_000,
            temperature: 0.1,
        }
    }
}

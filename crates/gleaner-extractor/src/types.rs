//! Result types for orchestration runs

use gleaner_domain::{KeyPoint, VerificationReport};

/// One full extraction pass: the points produced and their verification.
///
/// Attempts are append-only history within one run; the attempt number is
/// 1-based and increments by exactly 1 on each retry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionAttempt {
    /// Ordinal attempt number, starting at 1.
    pub number: u32,

    /// The key points this attempt produced, in extraction order.
    pub points: Vec<KeyPoint>,

    /// Per-point verdicts for this attempt. Empty when auto-check was
    /// disabled.
    pub report: VerificationReport,
}

/// The terminal artifact of a successful orchestration run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    /// The accepted key points rendered as bullet text.
    pub key_points: String,

    /// Every attempt made during the run, for audit. Only the last
    /// attempt's points are "live".
    pub attempts: Vec<ExtractionAttempt>,

    /// True when retries were exhausted and the accepted result still
    /// contains known-inaccurate points.
    pub contains_inaccurate: bool,
}

impl ExtractionOutcome {
    /// The final (accepted) attempt.
    ///
    /// A successful run always has at least one attempt.
    pub fn final_attempt(&self) -> &ExtractionAttempt {
        self.attempts
            .last()
            .expect("a successful run has at least one attempt")
    }

    /// The final attempt's verification report.
    pub fn final_report(&self) -> &VerificationReport {
        &self.final_attempt().report
    }
}

/// Render points as the persisted bullet-text form.
pub(crate) fn render_bullets(points: &[KeyPoint]) -> String {
    points
        .iter()
        .map(|p| format!("* {}", p.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bullets() {
        let points = vec![KeyPoint::new("first"), KeyPoint::new("second")];
        assert_eq!(render_bullets(&points), "* first\n* second");
    }

    #[test]
    fn test_render_bullets_empty() {
        assert_eq!(render_bullets(&[]), "");
    }
}

//! Report assembly over per-point fact checks

use futures::stream::{self, StreamExt};
use gleaner_domain::{CancelHandle, FactChecker, KeyPoint, SourceDocument, VerificationReport};
use thiserror::Error;
use tracing::{debug, info};

/// Returned when a cancellation signal is observed between point checks.
#[derive(Debug, Error)]
#[error("verification cancelled")]
pub struct VerificationCancelled;

/// Verifies a sequence of key points and assembles a `VerificationReport`.
///
/// Each point is checked independently and in isolation; no cross-point
/// context reaches the fact checker. The report's categories preserve the
/// original relative order of points, and every input point lands in exactly
/// one category (the fact checker is infallible, so nothing is dropped).
pub struct PointVerifier<F: FactChecker> {
    checker: F,
    parallel_checks: usize,
}

impl<F: FactChecker> PointVerifier<F> {
    /// Create a sequential verifier.
    pub fn new(checker: F) -> Self {
        Self {
            checker,
            parallel_checks: 1,
        }
    }

    /// Allow up to `n` points to be checked concurrently.
    ///
    /// Results are still assembled in original point order, never completion
    /// order. Values below 1 are treated as 1.
    pub fn with_parallel_checks(mut self, n: usize) -> Self {
        self.parallel_checks = n.max(1);
        self
    }

    /// Verify `points` against `source`.
    ///
    /// Cancellation is observed between per-point checks (sequential mode)
    /// or before the batch starts (concurrent mode); an in-flight check is
    /// allowed to complete.
    pub async fn verify(
        &self,
        source: &SourceDocument,
        points: &[KeyPoint],
        cancel: &CancelHandle,
    ) -> Result<VerificationReport, VerificationCancelled> {
        let mut report = VerificationReport::new();
        if points.is_empty() {
            return Ok(report);
        }

        info!(
            source = %source.id(),
            points = points.len(),
            parallel = self.parallel_checks,
            "verifying key points"
        );

        if self.parallel_checks > 1 {
            if cancel.is_cancelled() {
                return Err(VerificationCancelled);
            }
            // Fan out, then restore original order by index before assembly.
            let mut indexed: Vec<(usize, KeyPoint, _)> =
                stream::iter(points.iter().cloned().enumerate())
                    .map(|(idx, point)| async move {
                        let verdict = self.checker.check(source, point.text()).await;
                        (idx, point, verdict)
                    })
                    .buffer_unordered(self.parallel_checks)
                    .collect()
                    .await;
            indexed.sort_by_key(|(idx, _, _)| *idx);

            for (_, point, verdict) in indexed {
                report.record(point, verdict);
            }
        } else {
            for point in points {
                if cancel.is_cancelled() {
                    debug!(source = %source.id(), "cancellation observed between checks");
                    return Err(VerificationCancelled);
                }
                let verdict = self.checker.check(source, point.text()).await;
                report.record(point.clone(), verdict);
            }
        }

        debug!(
            accurate = report.accurate.len(),
            inaccurate = report.inaccurate.len(),
            uncertain = report.uncertain.len(),
            "verification report assembled"
        );
        Ok(report)
    }
}

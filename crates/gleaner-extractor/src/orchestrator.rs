//! The verification-and-regeneration loop

use crate::config::RunConfig;
use crate::error::OrchestrationError;
use crate::prompt::build_guidance;
use crate::types::{render_bullets, ExtractionAttempt, ExtractionOutcome};
use gleaner_checker::PointVerifier;
use gleaner_domain::{
    CancelHandle, FactChecker, KeyPoint, KeyPointExtractor, SourceDocument, VerificationReport,
};
use tracing::{info, warn};

/// Where a run currently is. Each suspension point (an LLM call) happens
/// inside exactly one phase, and every transition is explicit.
enum Phase {
    /// Asking the generation model for points; `guidance` is set on
    /// regeneration attempts only.
    Extracting {
        attempt: u32,
        guidance: Option<String>,
    },
    /// Fact-checking the attempt's points one by one.
    Verifying { attempt: u32, points: Vec<KeyPoint> },
    /// Choosing what to do with a verified attempt.
    Deciding {
        attempt: u32,
        points: Vec<KeyPoint>,
        report: VerificationReport,
    },
}

/// What to do with a verified attempt.
#[derive(Debug, PartialEq, Eq)]
enum Decision {
    /// The report is clean; the attempt's points are final.
    Accept,
    /// Inaccurate points were found and attempts remain; re-extract with
    /// this guidance.
    Retry { guidance: String },
    /// Inaccurate points were found and the attempt budget is spent; the
    /// last attempt's points are accepted flagged.
    GiveUp,
}

/// Pure transition out of the Deciding phase.
///
/// Uncertain verdicts never trigger a retry; only known-inaccurate points
/// do, and only while attempts remain.
fn decide(report: &VerificationReport, attempt: u32, max_attempts: u32) -> Decision {
    if report.is_clean() {
        Decision::Accept
    } else if attempt < max_attempts {
        Decision::Retry {
            guidance: build_guidance(report),
        }
    } else {
        Decision::GiveUp
    }
}

/// Drives one source document through extraction, verification, and bounded
/// regeneration, producing an [`ExtractionOutcome`].
///
/// The orchestrator owns the loop and nothing else: extraction and
/// fact-checking are behind trait seams, and all knobs arrive through
/// [`RunConfig`] at construction.
pub struct Orchestrator<E: KeyPointExtractor, F: FactChecker> {
    extractor: E,
    verifier: PointVerifier<F>,
    config: RunConfig,
}

impl<E: KeyPointExtractor, F: FactChecker> Orchestrator<E, F> {
    /// Create an orchestrator, rejecting invalid configuration up front.
    pub fn new(
        extractor: E,
        verifier: PointVerifier<F>,
        config: RunConfig,
    ) -> Result<Self, OrchestrationError> {
        config.validate().map_err(OrchestrationError::Config)?;
        Ok(Self {
            extractor,
            verifier,
            config,
        })
    }

    /// Run to completion without external cancellation.
    pub async fn run(&self, source: &SourceDocument) -> Result<ExtractionOutcome, OrchestrationError> {
        self.run_with_cancel(source, &CancelHandle::new()).await
    }

    /// Run to completion, observing `cancel` at suspension-point boundaries:
    /// before each extraction call and between per-point checks. An
    /// in-flight model call is allowed to complete.
    pub async fn run_with_cancel(
        &self,
        source: &SourceDocument,
        cancel: &CancelHandle,
    ) -> Result<ExtractionOutcome, OrchestrationError> {
        let mut attempts: Vec<ExtractionAttempt> = Vec::new();
        let mut phase = Phase::Extracting {
            attempt: 1,
            guidance: None,
        };

        loop {
            phase = match phase {
                Phase::Extracting { attempt, guidance } => {
                    if cancel.is_cancelled() {
                        return Err(OrchestrationError::Cancelled { attempts });
                    }
                    info!(source = %source.id(), attempt, "extraction attempt");

                    let points = match self.extractor.extract(source, guidance.as_deref()).await {
                        Ok(points) => points,
                        Err(source_err) => {
                            return Err(OrchestrationError::Generation {
                                attempt,
                                source: source_err,
                                attempts,
                            });
                        }
                    };

                    if !self.config.auto_check {
                        // No verification requested: the first successful
                        // extraction is final, with an empty report.
                        return Ok(finish(attempts, attempt, points, VerificationReport::new(), false));
                    }
                    Phase::Verifying { attempt, points }
                }

                Phase::Verifying { attempt, points } => {
                    let report = self
                        .verifier
                        .verify(source, &points, cancel)
                        .await
                        .map_err(|_| OrchestrationError::Cancelled {
                            attempts: attempts.clone(),
                        })?;
                    Phase::Deciding {
                        attempt,
                        points,
                        report,
                    }
                }

                Phase::Deciding {
                    attempt,
                    points,
                    report,
                } => match decide(&report, attempt, self.config.max_attempts) {
                    Decision::Accept => {
                        info!(source = %source.id(), attempt, "attempt accepted");
                        return Ok(finish(attempts, attempt, points, report, false));
                    }
                    Decision::Retry { guidance } => {
                        warn!(
                            source = %source.id(),
                            attempt,
                            inaccurate = report.inaccurate.len(),
                            "inaccurate points found, regenerating"
                        );
                        attempts.push(ExtractionAttempt {
                            number: attempt,
                            points,
                            report,
                        });
                        Phase::Extracting {
                            attempt: attempt + 1,
                            guidance: Some(guidance),
                        }
                    }
                    Decision::GiveUp => {
                        warn!(
                            source = %source.id(),
                            attempt,
                            inaccurate = report.inaccurate.len(),
                            "attempt budget exhausted, accepting flagged result"
                        );
                        return Ok(finish(attempts, attempt, points, report, true));
                    }
                },
            };
        }
    }
}

/// Seal a run: append the final attempt and render its points.
fn finish(
    mut attempts: Vec<ExtractionAttempt>,
    number: u32,
    points: Vec<KeyPoint>,
    report: VerificationReport,
    contains_inaccurate: bool,
) -> ExtractionOutcome {
    let key_points = render_bullets(&points);
    attempts.push(ExtractionAttempt {
        number,
        points,
        report,
    });
    ExtractionOutcome {
        key_points,
        attempts,
        contains_inaccurate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_domain::{VerificationVerdict, VerifiedPoint};

    fn verdict(point: &str, ok: bool) -> VerifiedPoint {
        VerifiedPoint {
            point: KeyPoint::new(point),
            verification: if ok {
                VerificationVerdict::consistent("Yes", "Yes")
            } else {
                VerificationVerdict::inconsistent("No", "No")
            },
        }
    }

    #[test]
    fn test_decide_accepts_clean_report() {
        let mut report = VerificationReport::new();
        report.accurate.push(verdict("fine", true));
        assert_eq!(decide(&report, 1, 2), Decision::Accept);
    }

    #[test]
    fn test_decide_accepts_empty_report() {
        assert_eq!(decide(&VerificationReport::new(), 1, 2), Decision::Accept);
    }

    #[test]
    fn test_decide_retries_while_attempts_remain() {
        let mut report = VerificationReport::new();
        report.inaccurate.push(verdict("bad", false));
        match decide(&report, 1, 2) {
            Decision::Retry { guidance } => assert!(guidance.contains("bad")),
            other => panic!("expected retry, got {:?}", other),
        }
    }

    #[test]
    fn test_decide_gives_up_on_last_attempt() {
        let mut report = VerificationReport::new();
        report.inaccurate.push(verdict("bad", false));
        assert_eq!(decide(&report, 2, 2), Decision::GiveUp);
    }

    #[test]
    fn test_uncertain_points_do_not_trigger_retry() {
        let mut report = VerificationReport::new();
        report.uncertain.push(VerifiedPoint {
            point: KeyPoint::new("unclear"),
            verification: VerificationVerdict::uncertain("unparseable", None),
        });
        assert_eq!(decide(&report, 1, 2), Decision::Accept);
    }
}

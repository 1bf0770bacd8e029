//! End-to-end orchestration tests with scripted extractors and checkers

use crate::{ChatKeyPointExtractor, OrchestrationError, Orchestrator, RunConfig};
use async_trait::async_trait;
use gleaner_checker::PointVerifier;
use gleaner_domain::{
    CancelHandle, ChatError, FactChecker, KeyPoint, KeyPointExtractor, SourceDocument,
    VerificationVerdict,
};
use gleaner_llm::MockChatClient;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Extractor that replays a script of responses and records the guidance it
/// was called with. Clones share the script and the log, so a test can keep
/// a handle after the orchestrator takes ownership.
#[derive(Clone)]
struct ScriptedExtractor {
    script: Arc<Mutex<VecDeque<Result<Vec<&'static str>, ChatError>>>>,
    guidance_log: Arc<Mutex<Vec<Option<String>>>>,
}

impl ScriptedExtractor {
    fn new(script: Vec<Result<Vec<&'static str>, ChatError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            guidance_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.guidance_log.lock().unwrap().len()
    }

    fn guidance_log(&self) -> Vec<Option<String>> {
        self.guidance_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyPointExtractor for ScriptedExtractor {
    async fn extract(
        &self,
        _source: &SourceDocument,
        guidance: Option<&str>,
    ) -> Result<Vec<KeyPoint>, ChatError> {
        self.guidance_log
            .lock()
            .unwrap()
            .push(guidance.map(str::to_string));
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted");
        next.map(|texts| texts.into_iter().map(KeyPoint::new).collect())
    }
}

/// Checker that flags any statement containing "wrong" as inconsistent.
struct KeywordChecker;

#[async_trait]
impl FactChecker for KeywordChecker {
    async fn check(&self, _source: &SourceDocument, statement: &str) -> VerificationVerdict {
        if statement.contains("wrong") {
            VerificationVerdict::inconsistent("No. The document does not support this.", "No")
        } else if statement.contains("maybe") {
            VerificationVerdict::uncertain("unparseable", None)
        } else {
            VerificationVerdict::consistent("Yes", "Yes")
        }
    }
}

fn doc() -> SourceDocument {
    SourceDocument::new("https://example.com/article", "Some article text.").unwrap()
}

fn checking_config(max_attempts: u32) -> RunConfig {
    RunConfig {
        auto_check: true,
        max_attempts,
    }
}

#[tokio::test]
async fn test_clean_first_attempt_accepted() {
    let extractor = ScriptedExtractor::new(vec![Ok(vec!["alpha", "beta", "gamma"])]);
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(2))
            .unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();

    assert_eq!(outcome.attempts.len(), 1);
    assert!(!outcome.contains_inaccurate);
    assert_eq!(outcome.key_points, "* alpha\n* beta\n* gamma");
    assert_eq!(outcome.final_report().accurate.len(), 3);
}

#[tokio::test]
async fn test_inaccurate_point_triggers_regeneration() {
    let extractor = ScriptedExtractor::new(vec![
        Ok(vec!["alpha", "wrong beta"]),
        Ok(vec!["alpha", "corrected beta"]),
    ]);
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(2))
            .unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();

    assert_eq!(outcome.attempts.len(), 2);
    assert!(!outcome.contains_inaccurate);
    assert_eq!(outcome.key_points, "* alpha\n* corrected beta");
    // The failed attempt stays in the history with its report.
    assert_eq!(outcome.attempts[0].number, 1);
    assert_eq!(outcome.attempts[0].report.inaccurate.len(), 1);
    assert_eq!(outcome.attempts[1].number, 2);
}

#[tokio::test]
async fn test_guidance_carries_prior_inaccurate_points() {
    let extractor = ScriptedExtractor::new(vec![
        Ok(vec!["wrong claim one", "wrong claim two", "fine claim"]),
        Ok(vec!["fine claim"]),
    ]);
    let handle = extractor.clone();
    let orchestrator = Orchestrator::new(
        extractor,
        PointVerifier::new(KeywordChecker),
        checking_config(2),
    )
    .unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();
    assert_eq!(outcome.attempts.len(), 2);

    let log = handle.guidance_log();
    assert_eq!(handle.calls(), 2);
    assert_eq!(log[0], None);
    let guidance = log[1].as_deref().unwrap();
    assert!(guidance.contains("wrong claim one"));
    assert!(guidance.contains("wrong claim two"));
    assert!(!guidance.contains("fine claim"));
}

#[tokio::test]
async fn test_retries_are_bounded() {
    // Every attempt produces an inaccurate point; the run must stop at
    // max_attempts and flag the result rather than loop.
    let extractor = ScriptedExtractor::new(vec![
        Ok(vec!["wrong one"]),
        Ok(vec!["wrong two"]),
    ]);
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(2))
            .unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();

    assert_eq!(outcome.attempts.len(), 2);
    assert!(outcome.contains_inaccurate);
    assert_eq!(outcome.key_points, "* wrong two");
    assert_eq!(outcome.final_report().inaccurate.len(), 1);
}

#[tokio::test]
async fn test_uncertain_verdicts_do_not_block_acceptance() {
    let extractor = ScriptedExtractor::new(vec![Ok(vec!["solid claim", "maybe claim"])]);
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(2))
            .unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();

    assert_eq!(outcome.attempts.len(), 1);
    assert!(!outcome.contains_inaccurate);
    assert_eq!(outcome.final_report().uncertain.len(), 1);
}

#[tokio::test]
async fn test_generation_failure_is_fatal_with_history() {
    let extractor = ScriptedExtractor::new(vec![
        Ok(vec!["wrong one", "fine one"]),
        Err(ChatError::Communication("connection reset".into())),
    ]);
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(3))
            .unwrap();

    let err = orchestrator.run(&doc()).await.unwrap_err();

    match &err {
        OrchestrationError::Generation {
            attempt, attempts, ..
        } => {
            assert_eq!(*attempt, 2);
            assert_eq!(attempts.len(), 1);
            assert_eq!(attempts[0].report.inaccurate.len(), 1);
        }
        other => panic!("expected generation error, got {other:?}"),
    }
    assert_eq!(err.attempts().len(), 1);
}

#[tokio::test]
async fn test_auto_check_disabled_accepts_without_verification() {
    let extractor = ScriptedExtractor::new(vec![Ok(vec!["wrong but unchecked"])]);
    let config = RunConfig {
        auto_check: false,
        max_attempts: 2,
    };
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), config).unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();

    assert_eq!(outcome.attempts.len(), 1);
    assert!(outcome.final_report().is_empty());
    assert!(!outcome.contains_inaccurate);
    assert_eq!(outcome.key_points, "* wrong but unchecked");
}

#[tokio::test]
async fn test_invalid_config_rejected_at_construction() {
    let extractor = ScriptedExtractor::new(vec![]);
    let config = RunConfig {
        auto_check: true,
        max_attempts: 0,
    };

    let result = Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), config);
    assert!(matches!(result, Err(OrchestrationError::Config(_))));
}

#[tokio::test]
async fn test_cancellation_before_first_extraction() {
    let extractor = ScriptedExtractor::new(vec![Ok(vec!["never reached"])]);
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(2))
            .unwrap();

    let cancel = CancelHandle::new();
    cancel.cancel();

    let err = orchestrator.run_with_cancel(&doc(), &cancel).await.unwrap_err();
    assert!(matches!(err, OrchestrationError::Cancelled { .. }));
    assert!(err.attempts().is_empty());
}

/// Checker that cancels the shared handle when it sees a marker point,
/// while still flagging "wrong" statements like [`KeywordChecker`].
struct TrippingChecker {
    cancel: CancelHandle,
}

#[async_trait]
impl FactChecker for TrippingChecker {
    async fn check(&self, _source: &SourceDocument, statement: &str) -> VerificationVerdict {
        if statement.contains("stop here") {
            self.cancel.cancel();
        }
        if statement.contains("wrong") {
            VerificationVerdict::inconsistent("No", "No")
        } else {
            VerificationVerdict::consistent("Yes", "Yes")
        }
    }
}

#[tokio::test]
async fn test_cancellation_mid_run_keeps_completed_attempts() {
    // Attempt 1 fails verification and is retried; cancellation lands while
    // attempt 2 is being verified. The error must carry attempt 1's full
    // report.
    let extractor = ScriptedExtractor::new(vec![
        Ok(vec!["wrong claim", "fine claim"]),
        Ok(vec!["stop here claim", "never checked claim"]),
    ]);
    let cancel = CancelHandle::new();
    let orchestrator = Orchestrator::new(
        extractor,
        PointVerifier::new(TrippingChecker {
            cancel: cancel.clone(),
        }),
        checking_config(3),
    )
    .unwrap();

    let err = orchestrator
        .run_with_cancel(&doc(), &cancel)
        .await
        .unwrap_err();

    match &err {
        OrchestrationError::Cancelled { attempts } => {
            assert_eq!(attempts.len(), 1);
            assert_eq!(attempts[0].number, 1);
            assert_eq!(attempts[0].report.inaccurate.len(), 1);
            assert_eq!(attempts[0].report.accurate.len(), 1);
        }
        other => panic!("expected cancelled error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_full_pipeline_over_mock_chat_client() {
    // Drive the real ChatKeyPointExtractor through the orchestrator.
    let client = MockChatClient::default();
    client.push_response(
        "Here are the key points of the article:\n* The wrong claim [1]\n* The fine claim",
    );
    client.push_response("Here are the key points of the article:\n* The fine claim");

    let extractor = ChatKeyPointExtractor::new(client.clone());
    let orchestrator =
        Orchestrator::new(extractor, PointVerifier::new(KeywordChecker), checking_config(2))
            .unwrap();

    let outcome = orchestrator.run(&doc()).await.unwrap();

    assert_eq!(outcome.attempts.len(), 2);
    assert_eq!(outcome.key_points, "* The fine claim");

    // The second request's system prompt must carry the regeneration
    // guidance naming the rejected point.
    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    let second_system = requests[1].system.as_deref().unwrap();
    assert!(second_system.contains("The wrong claim"));
    assert!(!requests[0].system.as_deref().unwrap().contains("The wrong claim"));
}

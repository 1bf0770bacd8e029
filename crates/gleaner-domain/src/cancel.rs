//! Cooperative cancellation for orchestration runs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag for cancelling an in-progress orchestration run.
///
/// Cancellation is cooperative: the flag is observed at suspension-point
/// boundaries (before an extraction attempt, between per-point verification
/// calls), never mid-call. Cloning yields a handle to the same flag, so one
/// side can cancel while the other observes.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Create a new, uncancelled handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

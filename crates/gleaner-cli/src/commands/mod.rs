//! Command implementations.

pub mod config;
pub mod convert;
pub mod extract;
pub mod stats;
pub mod verify;

pub use self::config::execute_config;
pub use self::convert::execute_convert;
pub use self::extract::execute_extract;
pub use self::stats::execute_stats;
pub use self::verify::execute_verify;

use gleaner_checker::{ChatFactChecker, PointVerifier};
use gleaner_domain::CancelHandle;
use gleaner_llm::OpenAiChatClient;

/// Build the point verifier from the configured fact-checker endpoint.
pub(crate) fn build_verifier(
    config: &crate::config::Config,
) -> PointVerifier<ChatFactChecker<OpenAiChatClient>> {
    let client = OpenAiChatClient::new(&config.checker.base_url, &config.checker.model);
    PointVerifier::new(ChatFactChecker::default_config(client))
        .with_parallel_checks(config.defaults.parallel_checks)
}

/// Cancel the handle on Ctrl-C so long runs stop at the next point or
/// article boundary instead of mid-write.
pub(crate) fn spawn_ctrl_c(cancel: &CancelHandle) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });
}

//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::{build_verifier, spawn_ctrl_c};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gleaner_dataset::JsonDatasetStore;
use gleaner_domain::{CancelHandle, ContentFetcher, DatasetEntry, DatasetStore};
use gleaner_extractor::{ChatKeyPointExtractor, OrchestrationError, Orchestrator, RunConfig};
use gleaner_fetch::PageFetcher;
use gleaner_llm::OpenAiChatClient;
use std::fs;

/// Instruction attached to every entry, used as the leading human message
/// in conversational exports.
const ENTRY_INSTRUCTION: &str = "Extract and list the key points from the following article:";

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let urls = collect_urls(&args)?;
    if urls.is_empty() {
        return Err(CliError::InvalidInput(
            "No URLs given; pass them as arguments or with --file".to_string(),
        ));
    }

    let run_config = RunConfig {
        auto_check: args.verify || config.defaults.auto_check,
        max_attempts: args.max_attempts.unwrap_or(config.defaults.max_attempts),
    };

    let mut chat = OpenAiChatClient::new(&config.extractor.base_url, &config.extractor.model);
    if let Some(key) = config.extractor_api_key() {
        chat = chat.with_api_key(key);
    }
    let orchestrator = Orchestrator::new(
        ChatKeyPointExtractor::new(chat),
        build_verifier(config),
        run_config,
    )?;

    let fetcher = PageFetcher::new()?;
    let store = JsonDatasetStore::new();
    let mut dataset = store.load(&args.dataset)?;
    let backup = !args.no_backup && config.defaults.backup;

    let cancel = CancelHandle::new();
    spawn_ctrl_c(&cancel);

    let mut added = 0usize;
    let mut failed = 0usize;
    let mut first_save = true;
    let mut interrupted = false;

    for url in &urls {
        if cancel.is_cancelled() {
            interrupted = true;
            break;
        }

        let source = match fetcher.fetch(url).await {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}", formatter.error(&format!("{}: {}", url, e)));
                failed += 1;
                continue;
            }
        };

        let outcome = match orchestrator.run_with_cancel(&source, &cancel).await {
            Ok(outcome) => outcome,
            Err(OrchestrationError::Cancelled { .. }) => {
                interrupted = true;
                break;
            }
            Err(e) => {
                eprintln!("{}", formatter.error(&format!("{}: {}", url, e)));
                failed += 1;
                continue;
            }
        };

        let points = outcome.final_attempt().points.len();
        let attempts = outcome.attempts.len();

        let mut entry = DatasetEntry::new(source.text(), outcome.key_points.as_str());
        entry.instruction = ENTRY_INSTRUCTION.to_string();
        if run_config.auto_check {
            entry = entry.with_verification(outcome.final_report().clone());
        }
        dataset.add_entry(entry);

        // Save after every article so an aborted run loses nothing; only
        // the first write of the run rotates the backup.
        store.save(&dataset, &args.dataset, backup && first_save)?;
        first_save = false;

        println!(
            "{}",
            formatter.entry_added(url, points, attempts, outcome.contains_inaccurate)
        );
        added += 1;
    }

    println!("{}", formatter.run_summary(added, failed));

    if interrupted {
        return Err(CliError::Interrupted);
    }
    Ok(())
}

/// Merge positional URLs with those read from `--file` (one per line,
/// `#`-comments allowed).
fn collect_urls(args: &ExtractArgs) -> Result<Vec<String>> {
    let mut urls = args.urls.clone();
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)?;
        urls.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }
    Ok(urls)
}

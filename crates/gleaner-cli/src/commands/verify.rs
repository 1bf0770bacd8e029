//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::commands::{build_verifier, spawn_ctrl_c};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gleaner_dataset::{verified_output_path, JsonDatasetStore};
use gleaner_domain::{CancelHandle, DatasetStore, KeyPoint, SourceDocument};
use gleaner_extractor::{parse_key_points, split_sentences};

/// Execute the verify command: re-check every entry's stored key points
/// against its article and write the annotated dataset to a sibling file.
pub async fn execute_verify(
    args: VerifyArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let store = JsonDatasetStore::new();
    let mut dataset = store.load(&args.dataset)?;
    if dataset.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Dataset '{}' is empty or missing",
            args.dataset.display()
        )));
    }

    let verifier = build_verifier(config);
    let cancel = CancelHandle::new();
    spawn_ctrl_c(&cancel);

    let mut verified = 0usize;
    let mut skipped = 0usize;
    let mut interrupted = false;

    for (idx, entry) in dataset.entries.iter_mut().enumerate() {
        let Some(output) = &entry.output else {
            skipped += 1;
            continue;
        };
        let points = points_from_output(output);
        if points.is_empty() {
            skipped += 1;
            continue;
        }
        let Ok(source) = SourceDocument::new(format!("entry-{}", idx + 1), entry.input.as_str())
        else {
            // No article text to check against.
            skipped += 1;
            continue;
        };

        match verifier.verify(&source, &points, &cancel).await {
            Ok(report) => {
                entry.verification_results = Some(report);
                verified += 1;
            }
            Err(_) => {
                interrupted = true;
                break;
            }
        }
    }

    let output_path = args
        .output
        .unwrap_or_else(|| verified_output_path(&args.dataset));
    store.save(
        &dataset,
        &output_path,
        !args.no_backup && config.defaults.backup,
    )?;

    println!(
        "{}",
        formatter.success(&format!(
            "{} entr(ies) verified, {} skipped, written to {}",
            verified,
            skipped,
            output_path.display()
        ))
    );

    if interrupted {
        return Err(CliError::Interrupted);
    }
    Ok(())
}

/// Recover discrete points from a stored bullet-text output.
///
/// Line-based parsing first; when the output has no usable line structure,
/// fall back to sentence splitting.
fn points_from_output(output: &str) -> Vec<KeyPoint> {
    let points = parse_key_points(output);
    if points.len() <= 1 {
        let sentences = split_sentences(output);
        if sentences.len() > points.len() {
            return sentences;
        }
    }
    points
}

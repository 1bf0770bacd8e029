//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gleaner_dataset::JsonDatasetStore;
use gleaner_domain::DatasetStore;
use std::fs;

/// Execute the convert command: write a ShareGPT-format copy of the
/// dataset for fine-tuning pipelines.
pub async fn execute_convert(args: ConvertArgs, formatter: &Formatter) -> Result<()> {
    let store = JsonDatasetStore::new();
    let dataset = store.load(&args.dataset)?;
    if dataset.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Dataset '{}' is empty or missing",
            args.dataset.display()
        )));
    }

    let conversations = dataset.to_sharegpt();
    let json = serde_json::to_string_pretty(&conversations)?;
    fs::write(&args.output, json)?;

    println!(
        "{}",
        formatter.success(&format!(
            "{} conversation(s) written to {}",
            conversations.len(),
            args.output.display()
        ))
    );
    Ok(())
}

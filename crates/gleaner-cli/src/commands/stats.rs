//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::error::Result;
use crate::output::Formatter;
use gleaner_dataset::JsonDatasetStore;
use gleaner_domain::DatasetStore;

/// Execute the stats command.
pub async fn execute_stats(args: StatsArgs, formatter: &Formatter) -> Result<()> {
    let store = JsonDatasetStore::new();
    let dataset = store.load(&args.dataset)?;
    println!("{}", formatter.format_stats(&dataset.stats())?);
    Ok(())
}

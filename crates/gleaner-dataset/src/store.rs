//! JSON file store with backup rotation

use gleaner_domain::{Dataset, DatasetStore};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading or saving a dataset file.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a valid dataset
    #[error("malformed dataset: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Stores datasets as pretty-printed JSON files.
///
/// Saving with `backup` first copies the existing file to a `.backup`
/// sibling (`dataset.json` → `dataset.json.backup`), so one prior version
/// survives a bad write. Loading a missing file yields an empty dataset;
/// a present but malformed file is an error, never silently replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDatasetStore;

impl JsonDatasetStore {
    /// Create a store.
    pub fn new() -> Self {
        Self
    }
}

impl DatasetStore for JsonDatasetStore {
    type Error = DatasetError;

    fn load(&self, path: &Path) -> Result<Dataset, DatasetError> {
        if !path.exists() {
            debug!(path = %path.display(), "no dataset file, starting empty");
            return Ok(Dataset::new());
        }
        let content = fs::read_to_string(path)?;
        let dataset = serde_json::from_str(&content)?;
        Ok(dataset)
    }

    fn save(&self, dataset: &Dataset, path: &Path, backup: bool) -> Result<(), DatasetError> {
        if backup && path.exists() {
            let backup_path = backup_path_for(path);
            fs::copy(path, &backup_path)?;
            debug!(backup = %backup_path.display(), "previous version backed up");
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(dataset)?;
        fs::write(path, json)?;
        info!(path = %path.display(), entries = dataset.len(), "dataset saved");
        Ok(())
    }
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Sibling path for re-verified output: `dataset.json` →
/// `dataset_verified.json`.
pub fn verified_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let file_name = match input.extension() {
        Some(ext) => format!("{}_verified.{}", stem, ext.to_string_lossy()),
        None => format!("{}_verified", stem),
    };
    input.with_file_name(file_name)
}

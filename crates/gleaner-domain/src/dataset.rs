//! Dataset module - the persisted collection of entries

use crate::entry::DatasetEntry;
use serde::{Deserialize, Serialize};

/// A collection of dataset entries.
///
/// On disk a dataset is a JSON array of entries; the wrapper exists for
/// statistics and format conversion. Storage itself lives behind
/// [`crate::DatasetStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    /// The entries, in insertion order.
    pub entries: Vec<DatasetEntry>,
}

/// Aggregate verification statistics for a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Number of entries in the dataset.
    pub total_entries: usize,
    /// Entries carrying verification metadata.
    pub verified_entries: usize,
    /// Total points across all verification reports.
    pub total_verified_points: usize,
    /// Points judged consistent with their source.
    pub accurate_points: usize,
    /// Points judged inconsistent with their source.
    pub inaccurate_points: usize,
    /// Points with no usable verdict.
    pub uncertain_points: usize,
}

/// One message in a ShareGPT-format conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGptMessage {
    /// Speaker role: `human` or `gpt`.
    pub from: String,
    /// Message text.
    pub value: String,
}

/// One ShareGPT-format conversation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGptConversation {
    /// The alternating messages.
    pub conversations: Vec<ShareGptMessage>,
    /// Provenance tag for the converted dataset.
    pub source: String,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn add_entry(&mut self, entry: DatasetEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute aggregate verification statistics.
    pub fn stats(&self) -> DatasetStats {
        let mut stats = DatasetStats {
            total_entries: self.entries.len(),
            ..DatasetStats::default()
        };

        for entry in &self.entries {
            if let Some(report) = &entry.verification_results {
                stats.verified_entries += 1;
                stats.accurate_points += report.accurate.len();
                stats.inaccurate_points += report.inaccurate.len();
                stats.uncertain_points += report.uncertain.len();
            }
        }
        stats.total_verified_points =
            stats.accurate_points + stats.inaccurate_points + stats.uncertain_points;
        stats
    }

    /// Convert to ShareGPT conversational format for fine-tuning.
    ///
    /// Entries without an output are skipped; an entry's instruction, when
    /// present, becomes a leading human message.
    pub fn to_sharegpt(&self) -> Vec<ShareGptConversation> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let output = entry.output.as_ref()?;
                let mut conversations = Vec::new();
                if !entry.instruction.trim().is_empty() {
                    conversations.push(ShareGptMessage {
                        from: "human".to_string(),
                        value: entry.instruction.clone(),
                    });
                }
                conversations.push(ShareGptMessage {
                    from: "human".to_string(),
                    value: entry.input.clone(),
                });
                conversations.push(ShareGptMessage {
                    from: "gpt".to_string(),
                    value: output.clone(),
                });
                Some(ShareGptConversation {
                    conversations,
                    source: "article-key-points".to_string(),
                })
            })
            .collect()
    }
}

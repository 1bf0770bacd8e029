//! Dataset entry module

use crate::report::VerificationReport;
use serde::{Deserialize, Serialize};

/// One persisted record: an article's text, the key points extracted from
/// it, and (when auto-check ran) the verification metadata.
///
/// This is the only place verification metadata is serialized; the
/// orchestration core hands ownership of its result to the entry builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Optional instruction text for fine-tuning formats.
    #[serde(default)]
    pub instruction: String,

    /// The original article content.
    #[serde(default)]
    pub input: String,

    /// The extracted key points as bullet text.
    pub output: Option<String>,

    /// Per-point verdicts, present only when verification ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_results: Option<VerificationReport>,
}

impl DatasetEntry {
    /// Create an entry from article content and extracted key points.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            instruction: String::new(),
            input: input.into(),
            output: Some(output.into()),
            verification_results: None,
        }
    }

    /// Attach a verification report to the entry.
    pub fn with_verification(mut self, report: VerificationReport) -> Self {
        self.verification_results = Some(report);
        self
    }

    /// Whether this entry was accepted with known-inaccurate points still in
    /// it (the exhausted-retries case) or verified clean.
    ///
    /// Returns `None` when the entry was never verified.
    pub fn is_clean(&self) -> Option<bool> {
        self.verification_results.as_ref().map(|r| r.is_clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::KeyPoint;
    use crate::verdict::VerificationVerdict;

    #[test]
    fn test_unverified_entry_omits_results() {
        let entry = DatasetEntry::new("article", "* point one");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("verification_results").is_none());
        assert_eq!(json["instruction"], serde_json::json!(""));
        assert_eq!(json["input"], serde_json::json!("article"));
        assert_eq!(json["output"], serde_json::json!("* point one"));
    }

    #[test]
    fn test_verified_entry_round_trip() {
        let mut report = VerificationReport::new();
        report.record(
            KeyPoint::new("point one"),
            VerificationVerdict::consistent("Yes", "Yes"),
        );
        let entry = DatasetEntry::new("article", "* point one").with_verification(report);

        let json = serde_json::to_string(&entry).unwrap();
        let back: DatasetEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.is_clean(), Some(true));
    }

    #[test]
    fn test_is_clean_without_verification() {
        let entry = DatasetEntry::new("article", "* point");
        assert_eq!(entry.is_clean(), None);
    }
}

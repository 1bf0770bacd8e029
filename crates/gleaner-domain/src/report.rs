//! Verification report module

use crate::point::KeyPoint;
use crate::verdict::{Consistency, VerificationVerdict};
use serde::{Deserialize, Serialize};

/// A key point paired with its verification verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedPoint {
    /// The verified statement.
    pub point: KeyPoint,

    /// The fact-checker's verdict for this statement.
    pub verification: VerificationVerdict,
}

/// Per-point verdicts for one extraction attempt, partitioned by category.
///
/// Invariant: every point recorded lands in exactly one category, so the
/// three category lengths always sum to the number of points verified.
/// Each category preserves the original relative order of the points as
/// produced by extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Points the fact-checker found consistent with the source.
    #[serde(default)]
    pub accurate: Vec<VerifiedPoint>,

    /// Points the fact-checker found inconsistent with the source.
    #[serde(default)]
    pub inaccurate: Vec<VerifiedPoint>,

    /// Points with no usable verdict.
    #[serde(default)]
    pub uncertain: Vec<VerifiedPoint>,
}

impl VerificationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point under the category its verdict dictates.
    pub fn record(&mut self, point: KeyPoint, verification: VerificationVerdict) {
        let entry = VerifiedPoint {
            point,
            verification,
        };
        match entry.verification.consistency {
            Consistency::Consistent => self.accurate.push(entry),
            Consistency::Inconsistent => self.inaccurate.push(entry),
            Consistency::Uncertain => self.uncertain.push(entry),
        }
    }

    /// Total number of points across all categories.
    pub fn len(&self) -> usize {
        self.accurate.len() + self.inaccurate.len() + self.uncertain.len()
    }

    /// Whether the report holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the report contains no inaccurate points.
    ///
    /// Uncertain points do not count against cleanliness: uncertainty is not
    /// treated as proof of error.
    pub fn is_clean(&self) -> bool {
        self.inaccurate.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(consistency: Consistency) -> VerificationVerdict {
        match consistency {
            Consistency::Consistent => VerificationVerdict::consistent("Yes", "Yes"),
            Consistency::Inconsistent => VerificationVerdict::inconsistent("No", "No"),
            Consistency::Uncertain => VerificationVerdict::uncertain("Maybe", Some("Maybe".into())),
        }
    }

    #[test]
    fn test_partition_invariant() {
        let mut report = VerificationReport::new();
        report.record(KeyPoint::new("a"), verdict(Consistency::Consistent));
        report.record(KeyPoint::new("b"), verdict(Consistency::Inconsistent));
        report.record(KeyPoint::new("c"), verdict(Consistency::Uncertain));
        report.record(KeyPoint::new("d"), verdict(Consistency::Consistent));

        assert_eq!(report.len(), 4);
        assert_eq!(report.accurate.len(), 2);
        assert_eq!(report.inaccurate.len(), 1);
        assert_eq!(report.uncertain.len(), 1);
    }

    #[test]
    fn test_category_order_preserved() {
        let mut report = VerificationReport::new();
        for text in ["first", "second", "third"] {
            report.record(KeyPoint::new(text), verdict(Consistency::Consistent));
        }
        let order: Vec<&str> = report.accurate.iter().map(|v| v.point.text()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_is_clean_ignores_uncertain() {
        let mut report = VerificationReport::new();
        report.record(KeyPoint::new("a"), verdict(Consistency::Uncertain));
        assert!(report.is_clean());

        report.record(KeyPoint::new("b"), verdict(Consistency::Inconsistent));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_persisted_shape() {
        let mut report = VerificationReport::new();
        report.record(KeyPoint::new("The sky is blue."), verdict(Consistency::Consistent));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["accurate"][0]["point"],
            serde_json::json!("The sky is blue.")
        );
        assert_eq!(
            json["accurate"][0]["verification"]["is_accurate"],
            serde_json::json!(true)
        );
        assert_eq!(json["inaccurate"], serde_json::json!([]));
        assert_eq!(json["uncertain"], serde_json::json!([]));
    }
}

//! Verification verdict module

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fact-checker's classification of a single key point.
///
/// Persisted as the nullable `is_accurate` field: `true` for consistent,
/// `false` for inconsistent, `null` for uncertain. Uncertain is the fail-safe
/// default: a malformed or missing signal from the verification model never
/// silently drops a point and never counts as proof of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Consistency {
    /// The point is supported by the source document.
    Consistent,
    /// The point contradicts or is unsupported by the source document.
    Inconsistent,
    /// The verification model gave no usable signal.
    Uncertain,
}

impl From<Option<bool>> for Consistency {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Consistency::Consistent,
            Some(false) => Consistency::Inconsistent,
            None => Consistency::Uncertain,
        }
    }
}

impl From<Consistency> for Option<bool> {
    fn from(value: Consistency) -> Self {
        match value {
            Consistency::Consistent => Some(true),
            Consistency::Inconsistent => Some(false),
            Consistency::Uncertain => None,
        }
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Consistency::Consistent => "consistent",
            Consistency::Inconsistent => "inconsistent",
            Consistency::Uncertain => "uncertain",
        };
        write!(f, "{}", s)
    }
}

/// The full verdict for one key point: classification, explanation, and the
/// raw model response kept for audit.
///
/// `raw_response` is `None` when the verification call itself failed and no
/// model output exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    /// The consistency classification (`is_accurate` on the wire).
    #[serde(rename = "is_accurate")]
    pub consistency: Consistency,

    /// Human-readable explanation of the verdict.
    pub explanation: String,

    /// Raw response from the verification model, if the call produced one.
    pub raw_response: Option<String>,
}

impl VerificationVerdict {
    /// Verdict for a point supported by the source.
    pub fn consistent(explanation: impl Into<String>, raw_response: impl Into<String>) -> Self {
        Self {
            consistency: Consistency::Consistent,
            explanation: explanation.into(),
            raw_response: Some(raw_response.into()),
        }
    }

    /// Verdict for a point contradicted by the source.
    pub fn inconsistent(explanation: impl Into<String>, raw_response: impl Into<String>) -> Self {
        Self {
            consistency: Consistency::Inconsistent,
            explanation: explanation.into(),
            raw_response: Some(raw_response.into()),
        }
    }

    /// Verdict when no usable signal was obtained.
    pub fn uncertain(explanation: impl Into<String>, raw_response: Option<String>) -> Self {
        Self {
            consistency: Consistency::Uncertain,
            explanation: explanation.into(),
            raw_response,
        }
    }
}

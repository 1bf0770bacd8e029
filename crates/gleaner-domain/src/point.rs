//! Key point module

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single extracted key-point statement.
///
/// Key points are ephemeral: they exist within one orchestration run until
/// folded into a [`crate::VerificationReport`] or rendered into the final
/// bullet text. Serialized as a bare string (the persisted `"point"` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPoint(String);

impl KeyPoint {
    /// Create a key point, trimming surrounding whitespace.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    /// The statement text.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Consume the point, returning its text.
    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for KeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for KeyPoint {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let point = KeyPoint::new("  The sky is blue.  ");
        assert_eq!(point.text(), "The sky is blue.");
    }

    #[test]
    fn test_serializes_as_string() {
        let point = KeyPoint::new("The sky is blue.");
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "\"The sky is blue.\"");

        let back: KeyPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}

//! Source document module - the input to every extraction run

use std::fmt;

/// An article's text together with its identifier (URL or filename).
///
/// Documents are immutable once constructed and read-only to the pipeline;
/// the fetching layer owns their creation. Construction rejects empty text,
/// since neither extraction nor verification can do anything useful with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    id: String,
    text: String,
}

impl SourceDocument {
    /// Create a new source document.
    ///
    /// Returns an error if the text is empty or whitespace-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use gleaner_domain::SourceDocument;
    ///
    /// let doc = SourceDocument::new("https://example.com/a", "Article text").unwrap();
    /// assert_eq!(doc.id(), "https://example.com/a");
    /// ```
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let text = text.into();
        if text.trim().is_empty() {
            return Err(format!("source document '{}' has no text", id));
        }
        Ok(Self { id, text })
    }

    /// The document identifier (URL or filename).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the document text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the document text is empty (never true for a constructed document).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} chars)", self.id, self.text.len())
    }
}

//! Parse generation-model output into discrete key points

use gleaner_domain::KeyPoint;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());
static PAREN_SOURCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(Source:.*?\)").unwrap());
static BRACKET_SOURCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[Source:.*?\]").unwrap());
static CITATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\w+\s*\d*\]").unwrap());
static INLINE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static EMPTY_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[*\-•]\s*$\n?").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static NUMBERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s+").unwrap());
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)[^.!?]*[.!?]+").unwrap());

/// Remove reference artifacts the extraction model leaks despite being told
/// not to: `[3]`, `(Source: ...)`, `[Source: ...]`, stray citation markers.
/// Also collapses runs of spaces and drops empty bullets and blank lines,
/// preserving the line structure the parser segments on.
pub fn clean_references(text: &str) -> String {
    let text = NUMERIC_CITATION.replace_all(text, "");
    let text = PAREN_SOURCE.replace_all(&text, "");
    let text = BRACKET_SOURCE.replace_all(&text, "");
    let text = CITATION_MARKER.replace_all(&text, "");
    let text = INLINE_SPACES.replace_all(&text, " ");
    let text = EMPTY_BULLET.replace_all(&text, "");
    let text = BLANK_LINES.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Whether a line is the boilerplate header the extraction prompt asks for.
fn is_header(line: &str) -> bool {
    line.to_lowercase().contains("here are the key points")
}

/// Strip a leading bullet or numbering marker from a line.
fn strip_marker(line: &str) -> &str {
    let trimmed = line.trim_start_matches(['*', '-', '•']).trim_start();
    if let Some(m) = NUMBERED_MARKER.find(trimmed) {
        return &trimmed[m.end()..];
    }
    trimmed
}

/// Parse model output into discrete key-point statements.
///
/// Segmentation is strictly line-based: one non-empty, non-header line is
/// one point, whatever its bullet marker. Nothing is merged or split beyond
/// that.
pub fn parse_key_points(text: &str) -> Vec<KeyPoint> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_header(line))
        .map(strip_marker)
        .filter(|line| !line.trim().is_empty())
        .map(KeyPoint::new)
        .collect()
}

/// Fallback segmentation for stored outputs with no line structure: treat
/// each sentence as a point.
pub fn split_sentences(text: &str) -> Vec<KeyPoint> {
    SENTENCE_BOUNDARY
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(KeyPoint::new)
        .collect()
}

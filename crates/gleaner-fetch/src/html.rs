//! Readable-text extraction from HTML

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose subtrees carry no article text.
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "iframe", "nav", "header", "footer", "aside", "form",
];

/// Elements that end a paragraph of text.
const PARAGRAPH_ELEMENTS: &[&str] = &[
    "p", "div", "section", "article", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
];

/// Elements that end a line of text.
const LINE_ELEMENTS: &[&str] = &["li", "br", "tr"];

/// Extract the readable text of an HTML document.
///
/// Chrome (scripts, styles, navigation, footers) is dropped; block elements
/// become line breaks; whitespace is normalized so the result reads as plain
/// paragraphs.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);
    normalize(&raw)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            let name = element.name();
            if SKIPPED_ELEMENTS.contains(&name) {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
            if PARAGRAPH_ELEMENTS.contains(&name) {
                out.push_str("\n\n");
            } else if LINE_ELEMENTS.contains(&name) {
                out.push('\n');
            }
        }
        Node::Text(text) => out.push_str(&text),
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Collapse runs of spaces within lines and runs of blank lines between
/// paragraphs.
fn normalize(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            // Keep at most one blank line in a row.
            if lines.last().is_some_and(|l| !l.is_empty()) {
                lines.push("");
            }
        } else {
            lines.push(line);
        }
    }
    while lines.last() == Some(&"") {
        lines.pop();
    }

    lines
        .iter()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_paragraph_text() {
        let html = "<html><body><p>First paragraph.</p><p>Second paragraph.</p></body></html>";
        assert_eq!(extract_text(html), "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_skips_scripts_and_styles() {
        let html = r#"<html><head><style>p { color: red; }</style></head>
            <body><script>var x = 1;</script><p>Visible text.</p></body></html>"#;
        let text = extract_text(html);
        assert_eq!(text, "Visible text.");
    }

    #[test]
    fn test_skips_navigation_chrome() {
        let html = "<body><nav>Home | About</nav><article><p>The story.</p></article>\
            <footer>Copyright</footer></body>";
        assert_eq!(extract_text(html), "The story.");
    }

    #[test]
    fn test_inline_elements_do_not_break_lines() {
        let html = "<p>A <b>bold</b> and <a href='#'>linked</a> claim.</p>";
        assert_eq!(extract_text(html), "A bold and linked claim.");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "<p>Spread   \n   out     words</p>";
        assert_eq!(extract_text(html), "Spread out words");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_text("<html><body></body></html>"), "");
    }
}

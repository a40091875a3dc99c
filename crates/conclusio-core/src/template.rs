use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// `{{name}}`, non-greedy, no nesting. Unbalanced braces simply don't match.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(.+?)\}\}").unwrap_or_else(|e| panic!("invalid marker pattern: {e}"))
});

/// Markers in one paragraph, in order, duplicates included.
pub fn markers_in(text: &str) -> Vec<&str> {
    MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Markers across all paragraphs, deduplicated, in order of first appearance.
pub fn extract_ordered_markers<S: AsRef<str>>(paragraphs: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut markers = Vec::new();
    for paragraph in paragraphs {
        for marker in markers_in(paragraph.as_ref()) {
            if seen.insert(marker) {
                markers.push(marker.to_string());
            }
        }
    }
    markers
}

pub fn placeholder(marker: &str) -> String {
    format!("{{{{{marker}}}}}")
}

pub fn has_placeholders(text: &str) -> bool {
    MARKER_RE.is_match(text)
}

/// A report template: ordered paragraphs with `{{marker}}` placeholders.
///
/// Never modified after loading; output is always built fresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    paragraphs: Vec<String>,
}

impl Template {
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// One paragraph per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn markers(&self) -> Vec<String> {
        extract_ordered_markers(&self.paragraphs)
    }
}

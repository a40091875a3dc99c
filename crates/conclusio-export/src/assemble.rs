use std::collections::HashSet;

use conclusio_core::config::ReportConfig;
use conclusio_core::rules::RuleTable;
use conclusio_core::template::{markers_in, placeholder, Template};
use conclusio_core::value::SessionState;
use conclusio_instruments::quantitative::is_quantitative;
use serde::Serialize;
use tracing::{debug, info};

/// The filled-in report: paragraphs in output order, before any file
/// format is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssembledDocument {
    paragraphs: Vec<String>,
}

impl AssembledDocument {
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// All paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }
}

/// Build the report from the template and collected values.
///
/// For each template paragraph, in order:
/// 1. If it references scores and every one of them is unanswered, drop it.
/// 2. Replace each marker with the text produced by its rule.
/// 3. Emit the trimmed paragraph, then any paragraphs expanded from
///    list-valued markers (recommendations).
pub fn assemble(template: &Template, state: &SessionState, rules: &RuleTable) -> AssembledDocument {
    let mut document = AssembledDocument::default();

    for paragraph in template.paragraphs() {
        let markers = unique(markers_in(paragraph));

        if all_scores_unanswered(&markers, state) {
            debug!(paragraph = %paragraph, "dropping paragraph with no answered scores");
            continue;
        }

        let mut text = paragraph.clone();
        let mut expanded = Vec::new();
        for marker in markers {
            let substitution = rules.substitute(marker, state.get(marker));
            text = text.replace(&placeholder(marker), &substitution.inline);
            expanded.extend(substitution.extra_paragraphs);
        }

        document.paragraphs.push(text.trim().to_string());
        if !expanded.is_empty() {
            debug!(count = expanded.len(), "expanding list into paragraphs");
            document.paragraphs.extend(expanded);
        }
    }

    info!(paragraphs = document.len(), "report assembled");
    document
}

/// [`assemble`] with the template and rules of a loaded report.
pub fn assemble_report(config: &ReportConfig, state: &SessionState) -> AssembledDocument {
    assemble(&config.template, state, &config.rules)
}

fn unique(markers: Vec<&str>) -> Vec<&str> {
    let mut seen = HashSet::new();
    markers.into_iter().filter(|m| seen.insert(*m)).collect()
}

fn all_scores_unanswered(markers: &[&str], state: &SessionState) -> bool {
    let mut scores = markers.iter().filter(|m| is_quantitative(m)).peekable();
    scores.peek().is_some() && scores.all(|m| !state.is_truthy(m))
}

//! Marker transform rules applied when assembling a document.
//!
//! Each marker resolves to exactly one [`MarkerRule`] through a
//! [`RuleTable`]: the first matching entry wins, everything else is
//! [`MarkerRule::Plain`].

use conclusio_instruments::quantitative::is_quantitative;
use serde::Serialize;

use crate::value::FieldValue;

pub const GRADE_MARKER: &str = "класс";
pub const GRADE_SUFFIX: &str = " классе";
pub const NOTED_PREFIX: &str = "отмеча";
pub const CLARIFICATION_MARKER: &str = "уточнение";
pub const RECOMMENDATIONS_MARKER: &str = "рекомендации";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRule {
    /// Standardized score or its interpretation.
    Quantitative,
    /// School grade: `"3"` → `"3 классе"`.
    Grade,
    /// Noted features: `"x, y"` → `"Отмечаются: x, y."`.
    Noted,
    /// Parenthesized clarification with a leading space.
    Clarification,
    /// Newline-separated list expanded into paragraphs after the current one.
    Recommendations,
    Plain,
}

/// The result of substituting one marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    /// Text replacing the placeholder inside the paragraph.
    pub inline: String,
    /// Paragraphs to append right after the current one.
    pub extra_paragraphs: Vec<String>,
}

impl Substitution {
    fn inline(text: impl Into<String>) -> Self {
        Self {
            inline: text.into(),
            extra_paragraphs: Vec::new(),
        }
    }
}

impl MarkerRule {
    pub fn substitute(self, value: Option<&FieldValue>) -> Substitution {
        let answered = value.filter(|v| v.is_truthy());

        let Some(value) = answered else {
            return Substitution::default();
        };

        match self {
            MarkerRule::Quantitative | MarkerRule::Plain => Substitution::inline(value.render()),
            MarkerRule::Grade => Substitution::inline(format!("{value}{GRADE_SUFFIX}")),
            MarkerRule::Noted => Substitution::inline(format!("Отмечаются: {value}.")),
            MarkerRule::Clarification => Substitution::inline(format!(" ({value})")),
            MarkerRule::Recommendations => Substitution {
                inline: String::new(),
                extra_paragraphs: value
                    .render()
                    .split('\n')
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

/// How a rule table entry matches a marker name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerMatch {
    Exact(String),
    Prefix(String),
    /// Any score or interpretation marker of the quantitative set.
    Quantitative,
}

impl MarkerMatch {
    pub fn matches(&self, marker: &str) -> bool {
        match self {
            MarkerMatch::Exact(name) => marker == name,
            MarkerMatch::Prefix(prefix) => marker.starts_with(prefix.as_str()),
            MarkerMatch::Quantitative => is_quantitative(marker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    entries: Vec<(MarkerMatch, MarkerRule)>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The rules used by the consultation report.
    pub fn standard() -> Self {
        Self::empty()
            .with(MarkerMatch::Quantitative, MarkerRule::Quantitative)
            .with(MarkerMatch::Exact(GRADE_MARKER.into()), MarkerRule::Grade)
            .with(MarkerMatch::Prefix(NOTED_PREFIX.into()), MarkerRule::Noted)
            .with(
                MarkerMatch::Exact(CLARIFICATION_MARKER.into()),
                MarkerRule::Clarification,
            )
            .with(
                MarkerMatch::Exact(RECOMMENDATIONS_MARKER.into()),
                MarkerRule::Recommendations,
            )
    }

    /// Append an entry. Earlier entries take precedence.
    pub fn with(mut self, matcher: MarkerMatch, rule: MarkerRule) -> Self {
        self.entries.push((matcher, rule));
        self
    }

    pub fn classify(&self, marker: &str) -> MarkerRule {
        self.entries
            .iter()
            .find(|(matcher, _)| matcher.matches(marker))
            .map(|(_, rule)| *rule)
            .unwrap_or(MarkerRule::Plain)
    }

    pub fn substitute(&self, marker: &str, value: Option<&FieldValue>) -> Substitution {
        self.classify(marker).substitute(value)
    }
}

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A collected form value.
///
/// Scores are stored as numbers, everything else (including joined
/// multi-select answers) as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Empty text and zero count as "not answered".
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Number(n) => *n != 0,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// Text used for substitution. Unanswered values render as `""`.
    pub fn render(&self) -> String {
        if self.is_truthy() {
            self.to_string()
        } else {
            String::new()
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

/// Values collected for one report: marker name → current value.
///
/// Written field by field by the form session, then only read by the
/// preview renderer and the document assembler. Missing markers behave
/// like empty text everywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionState {
    values: IndexMap<String, FieldValue>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, marker: &str) -> Option<&FieldValue> {
        self.values.get(marker)
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.values.contains_key(marker)
    }

    pub fn set(&mut self, marker: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(marker.into(), value.into());
    }

    /// Reset a marker to empty text, keeping its entry.
    pub fn clear(&mut self, marker: &str) {
        self.set(marker, FieldValue::empty());
    }

    pub fn is_truthy(&self, marker: &str) -> bool {
        self.get(marker).is_some_and(FieldValue::is_truthy)
    }

    pub fn render(&self, marker: &str) -> String {
        self.get(marker).map(FieldValue::render).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for SessionState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = SessionState::new();
        for (marker, value) in iter {
            state.set(marker, value);
        }
        state
    }
}

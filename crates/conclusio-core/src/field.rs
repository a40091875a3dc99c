use conclusio_instruments::InstrumentKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 100;

/// The control a field renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FieldKind {
    #[serde(rename = "radio")]
    SingleChoice,
    #[serde(rename = "multiselect")]
    MultiChoice,
    #[default]
    Text,
    Number,
}

/// Metadata for one form field, keyed by its marker name in [`FieldSchema`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub help: String,

    #[serde(rename = "type", default)]
    pub kind: FieldKind,

    /// Selectable options for choice fields, in display order.
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub min: Option<i64>,

    #[serde(default)]
    pub max: Option<i64>,

    /// Instrument used to derive `<marker>_интерпретация` from a number
    /// field. Unknown function names fail schema loading.
    #[serde(
        rename = "interpretation_function",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(as = "Option<String>")]
    pub interpretation: Option<InstrumentKind>,
}

impl FieldDescriptor {
    /// Numeric bounds, ordered so that `min <= max`.
    pub fn bounds(&self) -> (i64, i64) {
        let min = self.min.unwrap_or(DEFAULT_MIN);
        let max = self.max.unwrap_or(DEFAULT_MAX);
        (min.min(max), max.max(min))
    }

    /// The label, or the marker name humanized when the schema has none.
    pub fn label_or(&self, marker: &str) -> String {
        self.label.clone().unwrap_or_else(|| humanize(marker))
    }
}

/// `"тип_семьи"` → `"Тип семьи"`.
pub fn humanize(marker: &str) -> String {
    let spaced = marker.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Field descriptors by marker name, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: IndexMap<String, FieldDescriptor>,
}

impl FieldSchema {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(CoreError::Schema)
    }

    pub fn get(&self, marker: &str) -> Option<&FieldDescriptor> {
        self.fields.get(marker)
    }

    pub fn insert(&mut self, marker: impl Into<String>, descriptor: FieldDescriptor) {
        self.fields.insert(marker.into(), descriptor);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

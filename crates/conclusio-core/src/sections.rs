use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Form layout: section title → markers rendered in that section.
///
/// Section and marker order follow the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sections {
    sections: IndexMap<String, Vec<String>>,
}

impl Sections {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(CoreError::Sections)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(title, markers)| (title.as_str(), markers.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<T: Into<String>> FromIterator<(T, Vec<String>)> for Sections {
    fn from_iter<I: IntoIterator<Item = (T, Vec<String>)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(title, markers)| (title.into(), markers))
                .collect(),
        }
    }
}

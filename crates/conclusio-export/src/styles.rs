use docx_rs::AlignmentType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    Justify,
}

impl From<Alignment> for AlignmentType {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => AlignmentType::Left,
            Alignment::Center => AlignmentType::Center,
            Alignment::Right => AlignmentType::Right,
            Alignment::Justify => AlignmentType::Both,
        }
    }
}

/// Typography applied to every paragraph of a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font family, used for Latin and Cyrillic as well as East Asian text.
    pub font: String,

    /// Font size in points.
    pub size_pt: usize,

    pub alignment: Alignment,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            size_pt: 12,
            alignment: Alignment::Justify,
        }
    }
}

//! Report catalog: which kinds of report exist and where their files live.
//!
//! ```json
//! {
//!   "reports": [
//!     {
//!       "title": "🧠 Консультативное заключение",
//!       "template": "consultation/template.docx",
//!       "fields": "consultation/fields.json",
//!       "sections": "consultation/sections.json"
//!     }
//!   ],
//!   "styles": { "font": "Times New Roman", "size_pt": 12 }
//! }
//! ```
//!
//! Relative paths resolve against the catalog file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use conclusio_core::config::ReportConfig;
use conclusio_core::field::FieldSchema;
use conclusio_core::sections::Sections;
use conclusio_core::template::Template;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::docx::read_template;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCatalog {
    pub reports: Vec<ReportKind>,

    #[serde(default)]
    pub styles: DocumentStyles,

    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportKind {
    pub title: String,
    pub template: PathBuf,
    pub fields: PathBuf,
    #[serde(default)]
    pub sections: Option<PathBuf>,
    /// Download name of the generated document.
    #[serde(default)]
    pub file_name: Option<String>,
}

impl ReportKind {
    /// `file_name` if set, otherwise derived from the title:
    /// `"🧠 Консультативное заключение"` → `"консультативное_заключение.docx"`.
    pub fn output_file_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        let mut words = self.title.split_whitespace();
        let first = words.next();
        let word = words.next().or(first).unwrap_or("отчёт");
        format!("{}_заключение.docx", word.to_lowercase())
    }
}

impl ReportCatalog {
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let json = read_text(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let mut catalog: ReportCatalog =
            serde_json::from_str(&json).map_err(|source| ExportError::Catalog {
                path: path.to_path_buf(),
                source,
            })?;
        catalog.base_dir = base_dir;
        info!(path = %path.display(), reports = catalog.reports.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Find a report kind by exact title or by 1-based position.
    pub fn find(&self, query: &str) -> Result<&ReportKind, ExportError> {
        let by_title = self.reports.iter().find(|r| r.title == query);
        let by_index = || {
            query
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| self.reports.get(i))
        };
        by_title
            .or_else(by_index)
            .ok_or_else(|| ExportError::UnknownReport(query.to_string()))
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Load schema, sections and template for a report kind.
    pub fn load_report(&self, kind: &ReportKind) -> Result<ReportConfig, ExportError> {
        let schema = FieldSchema::from_json(&read_text(&self.resolve(&kind.fields))?)?;

        let sections = match &kind.sections {
            Some(path) => Some(Sections::from_json(&read_text(&self.resolve(path))?)?),
            None => None,
        };

        let template = load_template(&self.resolve(&kind.template))?;

        info!(
            title = %kind.title,
            fields = schema.len(),
            sections = sections.as_ref().map_or(0, Sections::len),
            paragraphs = template.paragraphs().len(),
            "report loaded"
        );

        Ok(ReportConfig::new(&kind.title, schema, sections, template))
    }
}

/// `.docx` templates go through the DOCX reader; anything else is read as
/// UTF-8 text with one paragraph per line.
pub fn load_template(path: &Path) -> Result<Template, ExportError> {
    let is_docx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));

    if is_docx {
        read_template(&read_bytes(path)?)
    } else {
        Ok(Template::from_text(&read_text(path)?))
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExportError> {
    fs::read(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String, ExportError> {
    fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

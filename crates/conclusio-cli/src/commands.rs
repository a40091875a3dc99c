use std::fs;
use std::path::{Path, PathBuf};

use conclusio_core::config::ReportConfig;
use conclusio_core::field::FieldDescriptor;
use conclusio_core::form::FormSession;
use conclusio_core::value::SessionState;
use conclusio_export::assemble::assemble_report;
use conclusio_export::catalog::{ReportCatalog, ReportKind};
use conclusio_export::docx::{write_docx, DOCX_MIME};
use conclusio_export::preview::render_preview;
use serde::Serialize;
use tracing::info;

use crate::answers::{Answers, AnswersInput};

/// A form field as exposed to an external form UI.
#[derive(Debug, Serialize)]
pub struct FieldEntry<'a> {
    pub section: Option<&'a str>,
    pub marker: String,
    pub label: String,
    pub descriptor: Option<&'a FieldDescriptor>,
}

pub fn list_kinds(catalog: &ReportCatalog) -> String {
    catalog
        .reports
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{}. {}", i + 1, kind.title))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn field_entries(config: &ReportConfig) -> Vec<FieldEntry<'_>> {
    config
        .form_layout()
        .into_iter()
        .map(|(section, marker)| {
            let descriptor = config.schema.get(&marker);
            let label = descriptor.map_or_else(|| marker.clone(), |d| d.label_or(&marker));
            FieldEntry {
                section,
                marker,
                label,
                descriptor,
            }
        })
        .collect()
}

/// Run one form session against pre-filled answers.
pub fn collect(config: &ReportConfig, answers: &Answers) -> SessionState {
    let mut input = AnswersInput::new(answers);
    let mut session = FormSession::new(config);
    session.render_all(&mut input);
    session.finish()
}

pub fn preview(config: &ReportConfig, answers: &Answers) -> String {
    render_preview(&config.template, &collect(config, answers))
}

/// Assemble the report and write it as DOCX. Returns the written path.
pub fn generate(
    catalog: &ReportCatalog,
    kind: &ReportKind,
    config: &ReportConfig,
    answers: &Answers,
    out: Option<&Path>,
) -> eyre::Result<PathBuf> {
    let state = collect(config, answers);
    let document = assemble_report(config, &state);
    let bytes = write_docx(&document, &catalog.styles)?;

    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(kind.output_file_name()));
    fs::write(&path, &bytes)
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;

    info!(
        path = %path.display(),
        bytes = bytes.len(),
        paragraphs = document.len(),
        mime = DOCX_MIME,
        "report written"
    );
    Ok(path)
}

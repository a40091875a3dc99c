use std::io::Cursor;

use conclusio_core::template::Template;
use docx_rs::{Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, RunFonts};

use crate::assemble::AssembledDocument;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// MIME type of generated reports.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Write an assembled report as DOCX.
///
/// Every paragraph becomes a single run carrying the configured font
/// (for all script ranges), size and alignment.
pub fn write_docx(document: &AssembledDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new();

    for text in document.paragraphs() {
        docx = docx.add_paragraph(body_paragraph(text, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let fonts = RunFonts::new()
        .ascii(&styles.font)
        .hi_ansi(&styles.font)
        .east_asia(&styles.font)
        .cs(&styles.font);

    let run = Run::new()
        .add_text(text)
        .fonts(fonts)
        .size(styles.size_pt.saturating_mul(2)); // OOXML uses half-points

    Paragraph::new().align(styles.alignment.into()).add_run(run)
}

/// Read a DOCX template: one template paragraph per body paragraph, with
/// the text of all its runs concatenated.
pub fn read_template(bytes: &[u8]) -> Result<Template, ExportError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(Template::new(paragraphs))
}

// Word often splits a placeholder like `{{класс}}` across several runs, so
// markers are only recognisable once the runs are joined.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}

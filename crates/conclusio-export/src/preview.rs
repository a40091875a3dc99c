use conclusio_core::template::{markers_in, placeholder, Template};
use conclusio_core::value::SessionState;
use conclusio_instruments::quantitative::is_quantitative;
use tracing::debug;

/// Render a plain-text preview of the report.
///
/// A paragraph referencing any unanswered score (or score interpretation)
/// is left out entirely. Every other paragraph gets its markers replaced
/// with the collected values and is trimmed; paragraphs are separated by a
/// blank line.
pub fn render_preview(template: &Template, state: &SessionState) -> String {
    let mut paragraphs = Vec::with_capacity(template.paragraphs().len());

    for paragraph in template.paragraphs() {
        let markers = markers_in(paragraph);

        if let Some(marker) = markers
            .iter()
            .find(|m| is_quantitative(m) && !state.is_truthy(m))
        {
            debug!(marker, "preview: skipping paragraph with unanswered score");
            continue;
        }

        let mut text = paragraph.clone();
        for marker in markers {
            text = text.replace(&placeholder(marker), &state.render(marker));
        }
        paragraphs.push(text.trim().to_string());
    }

    paragraphs.join("\n\n").trim().to_string()
}

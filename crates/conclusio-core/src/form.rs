//! Form session: renders fields through a UI-agnostic [`FormInput`] and
//! records the collected values into a [`SessionState`].
//!
//! Some fields are only shown when another field has a particular answer
//! (see [`DEPENDENT_FIELDS`]). A dependent field whose trigger is not
//! satisfied is always reset to empty text so that stale answers never
//! reach the report.

use conclusio_instruments::quantitative::{
    instrument_for, interpretation_marker, INTERPRETATION_SUFFIX,
};
use conclusio_instruments::scoring::parse_score;
use conclusio_instruments::InstrumentKind;
use tracing::{debug, warn};

use crate::config::ReportConfig;
use crate::field::{FieldDescriptor, FieldKind};
use crate::rules::MarkerRule;
use crate::value::{FieldValue, SessionState};

/// Free-text field rendered as a multi-line text area.
pub const PROJECTIVE_FINDINGS_MARKER: &str = "по_данным_проективных_методик";

/// Markers not rendered as fields of their own while the schema describes
/// them. Without a schema entry they fall back to a free-text control.
pub const UNRENDERED_MARKERS: [&str; 1] = ["отмечается"];

/// What the user sees for one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrompt<'a> {
    /// Marker the answer is stored under.
    pub key: &'a str,
    pub label: String,
    pub help: &'a str,
}

/// The form UI. Each call renders one control and returns its current value.
pub trait FormInput {
    /// Start of a titled section.
    fn section(&mut self, _title: &str) {}

    fn text(&mut self, prompt: &FieldPrompt<'_>) -> String;

    fn long_text(&mut self, prompt: &FieldPrompt<'_>) -> String {
        self.text(prompt)
    }

    fn single_choice(&mut self, prompt: &FieldPrompt<'_>, options: &[String]) -> String;

    fn multi_choice(&mut self, prompt: &FieldPrompt<'_>, options: &[String]) -> Vec<String>;

    fn number(&mut self, prompt: &FieldPrompt<'_>, min: i64, max: i64) -> i64;

    /// Informational message shown next to a field (e.g. an interpretation).
    fn notice(&mut self, _key: &str, _text: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentControl {
    /// Options come from the dependent marker's schema entry.
    SingleChoice,
    /// Options come from the dependent marker's schema entry; joined with `", "`.
    MultiChoice,
    FreeText,
}

/// A field revealed by a particular answer to another field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentField {
    pub trigger: &'static str,
    pub reveal_on: &'static [&'static str],
    pub dependent: &'static str,
    pub control: DependentControl,
    /// Label used when the schema has no entry (or no label) for the dependent.
    pub label: &'static str,
}

impl DependentField {
    pub fn is_revealed_by(&self, answer: &str) -> bool {
        self.reveal_on.contains(&answer)
    }
}

pub const DEPENDENT_FIELDS: [DependentField; 4] = [
    DependentField {
        trigger: "стратегии",
        reveal_on: &["Выявляются признаки дисфункциональных стратегий семейного взаимодействия."],
        dependent: "отмечается_семья",
        control: DependentControl::MultiChoice,
        label: "отмечается",
    },
    DependentField {
        trigger: "обучается_в",
        reveal_on: &["школе", "коррекционной школе"],
        dependent: "класс",
        control: DependentControl::SingleChoice,
        label: "Класс",
    },
    DependentField {
        trigger: "школьная_программа",
        reveal_on: &["по адаптированной программе"],
        dependent: "вариант_программы",
        control: DependentControl::FreeText,
        label: "вариант программы",
    },
    DependentField {
        trigger: "речевой_контакт",
        reveal_on: &["недоступен в связи с"],
        dependent: "уточнение",
        control: DependentControl::FreeText,
        label: "Уточнение причины недоступности речевого контакта",
    },
];

/// Whether `marker` is collected by something other than its own control.
///
/// A described unrendered marker is never shown. A dependent is collected by
/// its trigger, so it only counts as managed when the trigger is in the
/// schema; otherwise nothing else would ever ask for it.
fn is_managed(config: &ReportConfig, marker: &str) -> bool {
    if UNRENDERED_MARKERS.contains(&marker) {
        return config.schema.get(marker).is_some();
    }
    DEPENDENT_FIELDS
        .iter()
        .any(|d| d.dependent == marker && config.schema.get(d.trigger).is_some())
}

/// Interpretation markers are written alongside their score, never rendered.
fn is_derived(config: &ReportConfig, marker: &str) -> bool {
    marker
        .strip_suffix(INTERPRETATION_SUFFIX)
        .is_some_and(|base| {
            instrument_for(base).is_some()
                || config
                    .schema
                    .get(base)
                    .is_some_and(|f| f.interpretation.is_some())
        })
}

/// Collects values for one report.
///
/// The session may be rendered repeatedly (every UI refresh re-renders the
/// whole form); each pass overwrites the values of the fields it renders.
pub struct FormSession<'a> {
    config: &'a ReportConfig,
    state: SessionState,
}

impl<'a> FormSession<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self {
            config,
            state: SessionState::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Render every field in form order: section layout when the report
    /// has one, otherwise template marker order.
    pub fn render_all(&mut self, input: &mut impl FormInput) {
        let config = self.config;
        let mut current_section = None;
        for (section, marker) in config.form_layout() {
            if let Some(title) = section
                && current_section != Some(title)
            {
                input.section(title);
                current_section = Some(title);
            }
            self.render_field(&marker, input);
        }
    }

    pub fn render_field(&mut self, marker: &str, input: &mut impl FormInput) {
        if let Some(kind) = instrument_for(marker) {
            self.render_score(marker, kind, input);
            return;
        }

        let config = self.config;
        if is_derived(config, marker) {
            debug!(marker, "skipping derived interpretation marker");
            return;
        }

        if is_managed(config, marker) {
            debug!(marker, "skipping field rendered through its trigger");
            return;
        }

        let Some(field) = config.schema.get(marker) else {
            let prompt = FieldPrompt {
                key: marker,
                label: marker.to_string(),
                help: "",
            };
            let value = input.text(&prompt);
            self.state.set(marker, value);
            return;
        };

        let prompt = FieldPrompt {
            key: marker,
            label: field.label_or(marker),
            help: &field.help,
        };

        match field.kind {
            FieldKind::SingleChoice => {
                let selected = input.single_choice(&prompt, &field.options);
                self.state.set(marker, selected.clone());
                self.apply_dependents(marker, &selected, input);
            }
            FieldKind::MultiChoice => {
                let separator = match config.rules.classify(marker) {
                    MarkerRule::Recommendations => "\n",
                    _ => ", ",
                };
                let selected = input.multi_choice(&prompt, &field.options);
                self.state.set(marker, selected.join(separator));
            }
            FieldKind::Text => {
                let value = if marker == PROJECTIVE_FINDINGS_MARKER {
                    input.long_text(&prompt)
                } else {
                    input.text(&prompt)
                };
                self.state.set(marker, value);
            }
            FieldKind::Number => self.render_number(marker, field, &prompt, input),
        }
    }

    /// Guarantee an entry for every template marker and hand back the values.
    pub fn finish(mut self) -> SessionState {
        for marker in self.config.template.markers() {
            if !self.state.contains(&marker) {
                self.state.clear(&marker);
            }
        }
        self.state
    }

    fn render_score(&mut self, marker: &str, kind: InstrumentKind, input: &mut impl FormInput) {
        let label = self
            .config
            .schema
            .get(marker)
            .and_then(|f| f.label.clone())
            .unwrap_or_else(|| marker.to_string());
        let prompt = FieldPrompt {
            key: marker,
            label,
            help: "",
        };

        let raw = input.text(&prompt);
        let interpretation_key = interpretation_marker(marker);

        match parse_score(&raw) {
            Ok(score) => {
                let interpretation = kind.instrument().interpret(score);
                self.state.set(marker, i64::from(score));
                self.state.set(interpretation_key, interpretation);
                input.notice(marker, interpretation);
            }
            Err(e) => {
                if !raw.is_empty() {
                    debug!(marker, error = %e, "score treated as unanswered");
                }
                self.state.clear(marker);
                self.state.clear(&interpretation_key);
            }
        }
    }

    fn render_number(
        &mut self,
        marker: &str,
        field: &FieldDescriptor,
        prompt: &FieldPrompt<'_>,
        input: &mut impl FormInput,
    ) {
        let (min, max) = field.bounds();
        let score = input.number(prompt, min, max).clamp(min, max);
        self.state.set(marker, score);

        if let Some(kind) = field.interpretation {
            let interpretation = u32::try_from(score)
                .map(|s| kind.instrument().interpret(s))
                .unwrap_or_default();
            self.state
                .set(interpretation_marker(marker), FieldValue::from(interpretation));
            input.notice(marker, interpretation);
        }
    }

    fn apply_dependents(&mut self, trigger: &str, answer: &str, input: &mut impl FormInput) {
        for dependent in DEPENDENT_FIELDS.iter().filter(|d| d.trigger == trigger) {
            if dependent.is_revealed_by(answer) {
                let value = self.collect_dependent(dependent, input);
                self.state.set(dependent.dependent, value);
            } else {
                self.state.clear(dependent.dependent);
            }
        }
    }

    fn collect_dependent(&self, dependent: &DependentField, input: &mut impl FormInput) -> String {
        let key = dependent.dependent;

        let field = match dependent.control {
            DependentControl::FreeText => {
                let prompt = FieldPrompt {
                    key,
                    label: dependent.label.to_string(),
                    help: "",
                };
                return input.text(&prompt);
            }
            DependentControl::SingleChoice | DependentControl::MultiChoice => {
                match self.config.schema.get(key) {
                    Some(field) => field,
                    None => {
                        warn!(marker = key, "dependent field has no schema entry, leaving it empty");
                        return String::new();
                    }
                }
            }
        };

        let prompt = FieldPrompt {
            key,
            label: field
                .label
                .clone()
                .unwrap_or_else(|| dependent.label.to_string()),
            help: &field.help,
        };

        if dependent.control == DependentControl::SingleChoice {
            input.single_choice(&prompt, &field.options)
        } else {
            input.multi_choice(&prompt, &field.options).join(", ")
        }
    }
}

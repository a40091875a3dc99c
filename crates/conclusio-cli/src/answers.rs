use std::collections::HashMap;
use std::path::Path;

use conclusio_core::form::{FieldPrompt, FormInput};
use serde::Deserialize;
use tracing::{debug, warn};

/// One answer as written in an answers file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
    List(Vec<String>),
}

/// Pre-filled answers keyed by marker name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<String, Answer>,
}

impl Answers {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> eyre::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
        Ok(Self::from_json(&json)?)
    }

    pub fn get(&self, marker: &str) -> Option<&Answer> {
        self.values.get(marker)
    }
}

/// Feeds a form session from an [`Answers`] file.
///
/// Unanswered controls behave like a freshly opened form: first option for
/// single choice, `min` for numbers, nothing for text and multi-select.
pub struct AnswersInput<'a> {
    answers: &'a Answers,
    notices: Vec<(String, String)>,
}

impl<'a> AnswersInput<'a> {
    pub fn new(answers: &'a Answers) -> Self {
        Self {
            answers,
            notices: Vec::new(),
        }
    }

    /// Interpretations shown while filling the form, as `(marker, text)`.
    pub fn notices(&self) -> &[(String, String)] {
        &self.notices
    }
}

impl FormInput for AnswersInput<'_> {
    fn section(&mut self, title: &str) {
        debug!(section = title, "filling section");
    }

    fn text(&mut self, prompt: &FieldPrompt<'_>) -> String {
        match self.answers.get(prompt.key) {
            Some(Answer::Text(s)) => s.clone(),
            Some(Answer::Number(n)) => n.to_string(),
            Some(Answer::List(items)) => items.join("\n"),
            None => String::new(),
        }
    }

    fn single_choice(&mut self, prompt: &FieldPrompt<'_>, options: &[String]) -> String {
        let default = options.first().cloned().unwrap_or_default();
        let chosen = match self.answers.get(prompt.key) {
            Some(Answer::Text(s)) => s,
            Some(other) => {
                warn!(marker = prompt.key, answer = ?other, "expected a single option, using default");
                return default;
            }
            None => return default,
        };

        if options.contains(chosen) {
            chosen.clone()
        } else {
            warn!(marker = prompt.key, answer = %chosen, "answer is not an option, using default");
            default
        }
    }

    fn multi_choice(&mut self, prompt: &FieldPrompt<'_>, options: &[String]) -> Vec<String> {
        let chosen: Vec<&String> = match self.answers.get(prompt.key) {
            Some(Answer::List(items)) => items.iter().collect(),
            Some(Answer::Text(s)) => vec![s],
            Some(Answer::Number(_)) | None => Vec::new(),
        };

        chosen
            .into_iter()
            .filter(|item| {
                let known = options.contains(*item);
                if !known {
                    warn!(marker = prompt.key, answer = %item, "dropping unknown option");
                }
                known
            })
            .cloned()
            .collect()
    }

    fn number(&mut self, prompt: &FieldPrompt<'_>, min: i64, _max: i64) -> i64 {
        match self.answers.get(prompt.key) {
            Some(Answer::Number(n)) => *n,
            Some(Answer::Text(s)) => s.trim().parse().unwrap_or_else(|_| {
                warn!(marker = prompt.key, answer = %s, "not a number, using minimum");
                min
            }),
            _ => min,
        }
    }

    fn notice(&mut self, key: &str, text: &str) {
        debug!(marker = key, interpretation = text, "score interpreted");
        self.notices.push((key.to_string(), text.to_string()));
    }
}

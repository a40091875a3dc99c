use std::num::IntErrorKind;

use serde::Serialize;

use crate::error::InstrumentError;

/// One interpretation category of an instrument.
///
/// Scores up to and including `upper` fall into this band. The last band of
/// every instrument is open-ended (`upper == None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub upper: Option<u32>,
    pub label: &'static str,
}

impl Band {
    pub const fn up_to(upper: u32, label: &'static str) -> Self {
        Self {
            upper: Some(upper),
            label,
        }
    }

    pub const fn above(label: &'static str) -> Self {
        Self { upper: None, label }
    }

    pub fn contains(&self, score: u32) -> bool {
        self.upper.is_none_or(|upper| score <= upper)
    }
}

/// Return the label of the first band the score does not exceed.
pub fn classify(bands: &[Band], score: u32) -> &'static str {
    bands
        .iter()
        .find(|band| band.contains(score))
        .map(|band| band.label)
        .unwrap_or_default()
}

/// Parse a raw score typed into a form field.
///
/// Only ASCII digit strings that parse to a value greater than zero are
/// accepted. Everything else counts as "not administered". Scores beyond
/// `u32::MAX` saturate, so they land in the open-ended top band.
pub fn parse_score(raw: &str) -> Result<u32, InstrumentError> {
    let invalid = || InstrumentError::InvalidScore {
        raw: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<u32>() {
        Ok(0) => Err(invalid()),
        Ok(score) => Ok(score),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u32::MAX),
        Err(_) => Err(invalid()),
    }
}

//! conclusio-instruments
//!
//! Psychometric instrument definitions and score interpretation. Pure data,
//! no I/O. Each instrument maps a raw score onto an ordered set of
//! categories using inclusive upper-bound thresholds.

pub mod error;
pub mod instruments;
pub mod quantitative;
pub mod scoring;

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use error::InstrumentError;
use scoring::Band;

/// Trait implemented by each scoring instrument.
pub trait Instrument: Send + Sync {
    /// Which instrument this is.
    fn kind(&self) -> InstrumentKind;

    /// Human-readable name (e.g., "Шкала депрессии Бека").
    fn name(&self) -> &str;

    /// Interpretation bands, ordered by ascending upper bound.
    fn bands(&self) -> &[Band];

    /// Map a score onto the label of the first band it does not exceed.
    fn interpret(&self, score: u32) -> &'static str {
        scoring::classify(self.bands(), score)
    }
}

/// The closed set of supported instruments.
///
/// In field schemas an instrument is referenced by the name of its
/// interpretation function (e.g. `interpret_beck`) or by its short id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InstrumentKind {
    Beck,
    HadsAnxiety,
    HadsDepression,
    SpielbergerState,
    SpielbergerTrait,
    Prikhozhan,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 6] = [
        InstrumentKind::Beck,
        InstrumentKind::HadsAnxiety,
        InstrumentKind::HadsDepression,
        InstrumentKind::SpielbergerState,
        InstrumentKind::SpielbergerTrait,
        InstrumentKind::Prikhozhan,
    ];

    pub fn id(self) -> &'static str {
        match self {
            InstrumentKind::Beck => "beck",
            InstrumentKind::HadsAnxiety => "hads_anxiety",
            InstrumentKind::HadsDepression => "hads_depression",
            InstrumentKind::SpielbergerState => "spielberger_state",
            InstrumentKind::SpielbergerTrait => "spielberger_trait",
            InstrumentKind::Prikhozhan => "prikhojan",
        }
    }

    /// Name of the interpretation function as written in field schemas.
    pub fn function_name(self) -> String {
        format!("interpret_{}", self.id())
    }

    pub fn instrument(self) -> &'static dyn Instrument {
        match self {
            InstrumentKind::Beck => &instruments::beck::Beck,
            InstrumentKind::HadsAnxiety => &instruments::hads::HadsAnxiety,
            InstrumentKind::HadsDepression => &instruments::hads::HadsDepression,
            InstrumentKind::SpielbergerState => &instruments::spielberger::SpielbergerState,
            InstrumentKind::SpielbergerTrait => &instruments::spielberger::SpielbergerTrait,
            InstrumentKind::Prikhozhan => &instruments::prikhozhan::Prikhozhan,
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InstrumentKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix("interpret_").unwrap_or(s);
        InstrumentKind::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(s.to_string()))
    }
}

impl TryFrom<String> for InstrumentKind {
    type Error = InstrumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InstrumentKind> for String {
    fn from(kind: InstrumentKind) -> Self {
        kind.function_name()
    }
}

/// Interpret a raw form value for an instrument.
///
/// Absent or blank input yields an empty string, as does anything that is
/// not a non-negative integer.
pub fn interpret(kind: InstrumentKind, raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return String::new();
    };

    match raw.parse::<u32>() {
        Ok(score) => kind.instrument().interpret(score).to_string(),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            kind.instrument().interpret(u32::MAX).to_string()
        }
        Err(_) => String::new(),
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    InstrumentKind::ALL
        .into_iter()
        .map(InstrumentKind::instrument)
        .collect()
}

/// Look up an instrument by id or interpretation function name.
pub fn get_instrument(id: &str) -> Option<&'static dyn Instrument> {
    id.parse::<InstrumentKind>().ok().map(InstrumentKind::instrument)
}

//! The closed set of form markers that carry standardized scores.
//!
//! Every score marker has a paired interpretation marker named
//! `<marker>_интерпретация`. Both halves count as quantitative for
//! suppression and formatting purposes.

use crate::InstrumentKind;

/// Suffix of the derived marker holding a score's interpretation.
pub const INTERPRETATION_SUFFIX: &str = "_интерпретация";

pub const QUANTITATIVE_MARKERS: [(&str, InstrumentKind); 10] = [
    ("шкала_бека", InstrumentKind::Beck),
    ("hads_тревога", InstrumentKind::HadsAnxiety),
    ("hads_депрессия", InstrumentKind::HadsDepression),
    ("спилбергер_ситуативная", InstrumentKind::SpielbergerState),
    ("спилбергер_личностная", InstrumentKind::SpielbergerTrait),
    ("прихожан_общая", InstrumentKind::Prikhozhan),
    ("прихожан_школьная", InstrumentKind::Prikhozhan),
    ("прихожан_самооценочная", InstrumentKind::Prikhozhan),
    ("прихожан_межличностная", InstrumentKind::Prikhozhan),
    ("прихожан_магическая", InstrumentKind::Prikhozhan),
];

/// The instrument scoring a score marker. Interpretation markers return `None`.
pub fn instrument_for(marker: &str) -> Option<InstrumentKind> {
    QUANTITATIVE_MARKERS
        .iter()
        .find(|(name, _)| *name == marker)
        .map(|(_, kind)| *kind)
}

pub fn interpretation_marker(marker: &str) -> String {
    format!("{marker}{INTERPRETATION_SUFFIX}")
}

/// True for score markers and their interpretation markers.
pub fn is_quantitative(marker: &str) -> bool {
    instrument_for(marker).is_some()
        || marker
            .strip_suffix(INTERPRETATION_SUFFIX)
            .is_some_and(|base| instrument_for(base).is_some())
}

use crate::scoring::Band;
use crate::{Instrument, InstrumentKind};

/// HADS: Hospital Anxiety and Depression Scale, anxiety subscale (0–21).
pub struct HadsAnxiety;

/// HADS: Hospital Anxiety and Depression Scale, depression subscale (0–21).
pub struct HadsDepression;

static ANXIETY_BANDS: [Band; 3] = [
    Band::up_to(7, "нормативный уровень тревоги"),
    Band::up_to(10, "субклинически выраженная тревога"),
    Band::above("клинически выраженная тревога"),
];

static DEPRESSION_BANDS: [Band; 3] = [
    Band::up_to(7, "нормативный уровень депрессии"),
    Band::up_to(10, "субклинически выраженное депрессивное состояние"),
    Band::above("клинически выраженное депрессивное состояние"),
];

impl Instrument for HadsAnxiety {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::HadsAnxiety
    }

    fn name(&self) -> &str {
        "HADS: тревога"
    }

    fn bands(&self) -> &[Band] {
        &ANXIETY_BANDS
    }
}

impl Instrument for HadsDepression {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::HadsDepression
    }

    fn name(&self) -> &str {
        "HADS: депрессия"
    }

    fn bands(&self) -> &[Band] {
        &DEPRESSION_BANDS
    }
}

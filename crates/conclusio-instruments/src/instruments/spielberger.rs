use crate::scoring::Band;
use crate::{Instrument, InstrumentKind};

/// Spielberger–Hanin scale, state (situational) anxiety. Total 20–80.
pub struct SpielbergerState;

/// Spielberger–Hanin scale, trait (personal) anxiety. Total 20–80.
pub struct SpielbergerTrait;

// Both scales share the same cut-offs.
static BANDS: [Band; 3] = [
    Band::up_to(30, "низкий уровень тревожности (норма)"),
    Band::up_to(45, "средний уровень тревожности"),
    Band::above("высокий уровень тревожности"),
];

impl Instrument for SpielbergerState {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::SpielbergerState
    }

    fn name(&self) -> &str {
        "Шкала Спилбергера–Ханина: ситуативная тревожность"
    }

    fn bands(&self) -> &[Band] {
        &BANDS
    }
}

impl Instrument for SpielbergerTrait {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::SpielbergerTrait
    }

    fn name(&self) -> &str {
        "Шкала Спилбергера–Ханина: личностная тревожность"
    }

    fn bands(&self) -> &[Band] {
        &BANDS
    }
}

use crate::scoring::Band;
use crate::{Instrument, InstrumentKind};

/// Prikhozhan child anxiety scale. Scored as stens (1–10) for the total and
/// each of the school, self-esteem, interpersonal and magical subscales.
pub struct Prikhozhan;

static BANDS: [Band; 5] = [
    Band::up_to(
        2,
        "тревожность не выражена или чрезмерное спокойствие защитного характера",
    ),
    Band::up_to(6, "нормативный уровень тревожности"),
    Band::up_to(8, "несколько завышенная тревожность"),
    Band::up_to(9, "явно повышенная тревожность"),
    Band::above("очень высокая тревожность (группа риска)"),
];

impl Instrument for Prikhozhan {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Prikhozhan
    }

    fn name(&self) -> &str {
        "Шкала тревожности Прихожан"
    }

    fn bands(&self) -> &[Band] {
        &BANDS
    }
}

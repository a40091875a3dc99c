use crate::scoring::Band;
use crate::{Instrument, InstrumentKind};

/// Beck Depression Inventory. Total 0–63, higher = more severe.
pub struct Beck;

static BANDS: [Band; 4] = [
    Band::up_to(9, "удовлетворительное эмоциональное состояние"),
    Band::up_to(19, "лёгкое депрессивное состояние"),
    Band::up_to(22, "умеренное депрессивное состояние"),
    Band::above("выраженное депрессивное состояние"),
];

impl Instrument for Beck {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Beck
    }

    fn name(&self) -> &str {
        "Шкала депрессии Бека"
    }

    fn bands(&self) -> &[Band] {
        &BANDS
    }
}

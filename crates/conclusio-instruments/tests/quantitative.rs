use conclusio_instruments::quantitative::{
    instrument_for, interpretation_marker, is_quantitative, QUANTITATIVE_MARKERS,
};
use conclusio_instruments::InstrumentKind;

#[test]
fn score_and_interpretation_markers_are_quantitative() {
    for (marker, _) in QUANTITATIVE_MARKERS {
        assert!(is_quantitative(marker));
        assert!(is_quantitative(&interpretation_marker(marker)));
    }
}

#[test]
fn other_markers_are_not_quantitative() {
    assert!(!is_quantitative("рекомендации"));
    assert!(!is_quantitative("класс"));
    assert!(!is_quantitative("_интерпретация"));
    assert!(!is_quantitative("жалобы_интерпретация"));
}

#[test]
fn prikhozhan_subscales_share_one_instrument() {
    assert_eq!(instrument_for("прихожан_магическая"), Some(InstrumentKind::Prikhozhan));
    assert_eq!(instrument_for("прихожан_общая"), Some(InstrumentKind::Prikhozhan));
    assert_eq!(instrument_for("шкала_бека_интерпретация"), None);
}

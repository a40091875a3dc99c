use conclusio_core::rules::RuleTable;
use conclusio_core::template::{has_placeholders, Template};
use conclusio_core::value::{FieldValue, SessionState};
use conclusio_export::assemble::assemble;

fn template(lines: &[&str]) -> Template {
    Template::new(lines.iter().map(|l| l.to_string()).collect())
}

fn paragraphs(template: &Template, state: &SessionState) -> Vec<String> {
    assemble(template, state, &RuleTable::standard())
        .paragraphs()
        .to_vec()
}

#[test]
fn paragraph_with_all_scores_unanswered_is_dropped() {
    let template = template(&[
        "До",
        "Шкала Бека: {{шкала_бека}} баллов, {{шкала_бека_интерпретация}}.",
        "После",
    ]);
    let state: SessionState = [("шкала_бека", ""), ("шкала_бека_интерпретация", "")]
        .into_iter()
        .collect();

    assert_eq!(paragraphs(&template, &state), vec!["До", "После"]);
}

#[test]
fn paragraph_with_some_answered_scores_is_kept() {
    let template = template(&["HADS: тревога {{hads_тревога}}, депрессия {{hads_депрессия}}."]);
    let mut state = SessionState::new();
    state.set("hads_тревога", FieldValue::Number(12));
    state.set("hads_депрессия", "");

    assert_eq!(
        paragraphs(&template, &state),
        vec!["HADS: тревога 12, депрессия ."]
    );
}

#[test]
fn non_score_markers_do_not_rescue_unanswered_scores() {
    let template = template(&["{{примечание}}: {{спилбергер_ситуативная}}"]);
    let state: SessionState = [("примечание", "Ситуативная тревожность")]
        .into_iter()
        .collect();

    assert!(paragraphs(&template, &state).is_empty());
}

#[test]
fn recommendations_expand_after_their_paragraph() {
    let template = template(&["Рекомендации:{{рекомендации}}", "Дата: {{дата}}"]);
    let state: SessionState = [("рекомендации", "Rec A\nRec B\n\n"), ("дата", "01.09.2026")]
        .into_iter()
        .collect();

    assert_eq!(
        paragraphs(&template, &state),
        vec!["Рекомендации:", "Rec A", "Rec B", "Дата: 01.09.2026"]
    );
}

#[test]
fn no_recommendations_adds_no_paragraphs() {
    let template = template(&["Рекомендации: {{рекомендации}}"]);
    let state: SessionState = [("рекомендации", "")].into_iter().collect();
    assert_eq!(paragraphs(&template, &state), vec!["Рекомендации:"]);
}

#[test]
fn special_markers_are_formatted() {
    let template = template(&[
        "Обучается в {{обучается_в}} {{класс}}.",
        "Речевой контакт недоступен в связи с{{уточнение}}.",
        "{{стратегии}} {{отмечается_семья}}",
    ]);
    let state: SessionState = [
        ("обучается_в", "школе"),
        ("класс", "3"),
        ("уточнение", "мутизмом"),
        ("стратегии", "Выявляются признаки."),
        ("отмечается_семья", "гиперопека, конфликты"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        paragraphs(&template, &state),
        vec![
            "Обучается в школе 3 классе.",
            "Речевой контакт недоступен в связи с (мутизмом).",
            "Выявляются признаки. Отмечаются: гиперопека, конфликты.",
        ]
    );
}

#[test]
fn empty_special_markers_vanish() {
    let template = template(&[
        "Обучается в {{обучается_в}} {{класс}}",
        "Контакт доступен{{уточнение}}.",
        "{{стратегии}} {{отмечается_семья}}",
    ]);
    let state: SessionState = [
        ("обучается_в", "детском саду"),
        ("класс", ""),
        ("уточнение", ""),
        ("стратегии", "Стратегии не выявлены."),
        ("отмечается_семья", ""),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        paragraphs(&template, &state),
        vec![
            "Обучается в детском саду",
            "Контакт доступен.",
            "Стратегии не выявлены.",
        ]
    );
}

#[test]
fn blank_template_paragraphs_are_kept() {
    let template = template(&["А", "", "Б"]);
    assert_eq!(paragraphs(&template, &SessionState::new()), vec!["А", "", "Б"]);
}

#[test]
fn assembled_text_has_no_residual_placeholders() {
    let template = template(&[
        "{{фио}}, {{возраст}} лет",
        "Шкала Бека: {{шкала_бека}} ({{шкала_бека_интерпретация}})",
        "Прихожан: {{прихожан_общая}} {{прихожан_общая_интерпретация}}",
        "Обучается в {{обучается_в}} {{класс}}",
        "{{отмечается}}{{уточнение}}",
        "{{рекомендации}}",
        "{{неизвестный}} {{неизвестный}}",
    ]);
    let mut state: SessionState = [
        ("фио", "Петров П."),
        ("обучается_в", "школе"),
        ("класс", "2"),
        ("рекомендации", "Rec A\nRec B"),
    ]
    .into_iter()
    .collect();
    state.set("возраст", FieldValue::Number(8));
    state.set("шкала_бека", FieldValue::Number(25));
    state.set("шкала_бека_интерпретация", "выраженное депрессивное состояние");

    let document = assemble(&template, &state, &RuleTable::standard());
    for paragraph in document.paragraphs() {
        assert!(!has_placeholders(paragraph), "residual placeholder in {paragraph:?}");
    }
    assert!(!document.text().contains("{{"));
    assert!(document.paragraphs().contains(&"Rec B".to_string()));
}

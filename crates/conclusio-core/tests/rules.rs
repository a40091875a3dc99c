use conclusio_core::rules::{MarkerMatch, MarkerRule, RuleTable, Substitution};
use conclusio_core::value::FieldValue;

fn text(s: &str) -> FieldValue {
    FieldValue::from(s)
}

#[test]
fn standard_table_classifies_markers() {
    let rules = RuleTable::standard();
    assert_eq!(rules.classify("шкала_бека"), MarkerRule::Quantitative);
    assert_eq!(rules.classify("hads_тревога_интерпретация"), MarkerRule::Quantitative);
    assert_eq!(rules.classify("класс"), MarkerRule::Grade);
    assert_eq!(rules.classify("отмечается"), MarkerRule::Noted);
    assert_eq!(rules.classify("отмечается_семья"), MarkerRule::Noted);
    assert_eq!(rules.classify("уточнение"), MarkerRule::Clarification);
    assert_eq!(rules.classify("рекомендации"), MarkerRule::Recommendations);
    assert_eq!(rules.classify("жалобы"), MarkerRule::Plain);
    assert_eq!(rules.classify("классы"), MarkerRule::Plain);
}

#[test]
fn first_matching_entry_wins() {
    let rules = RuleTable::empty()
        .with(MarkerMatch::Exact("отмечается".into()), MarkerRule::Plain)
        .with(MarkerMatch::Prefix("отмеча".into()), MarkerRule::Noted);
    assert_eq!(rules.classify("отмечается"), MarkerRule::Plain);
    assert_eq!(rules.classify("отмечается_семья"), MarkerRule::Noted);
}

#[test]
fn grade_gets_suffix_only_when_answered() {
    let rules = RuleTable::standard();
    assert_eq!(rules.substitute("класс", Some(&text("3"))).inline, "3 классе");
    assert_eq!(rules.substitute("класс", Some(&text(""))).inline, "");
    assert_eq!(rules.substitute("класс", None).inline, "");
}

#[test]
fn noted_features_are_wrapped() {
    let rules = RuleTable::standard();
    assert_eq!(
        rules
            .substitute("отмечается_семья", Some(&text("гиперопека, конфликты")))
            .inline,
        "Отмечаются: гиперопека, конфликты."
    );
    assert_eq!(rules.substitute("отмечается", Some(&text(""))).inline, "");
}

#[test]
fn clarification_is_parenthesized_with_leading_space() {
    let rules = RuleTable::standard();
    assert_eq!(
        rules.substitute("уточнение", Some(&text("мутизма"))).inline,
        " (мутизма)"
    );
    assert_eq!(rules.substitute("уточнение", None).inline, "");
}

#[test]
fn recommendations_expand_into_paragraphs() {
    let rules = RuleTable::standard();
    let substitution = rules.substitute("рекомендации", Some(&text("Rec A\nRec B\n\n")));
    assert_eq!(
        substitution,
        Substitution {
            inline: String::new(),
            extra_paragraphs: vec!["Rec A".to_string(), "Rec B".to_string()],
        }
    );
}

#[test]
fn recommendation_lines_are_trimmed() {
    let substitution =
        MarkerRule::Recommendations.substitute(Some(&text("  Консультация невролога \n \n")));
    assert_eq!(substitution.extra_paragraphs, vec!["Консультация невролога"]);
}

#[test]
fn quantitative_values_render_as_numbers_or_nothing() {
    let rules = RuleTable::standard();
    assert_eq!(
        rules.substitute("шкала_бека", Some(&FieldValue::Number(14))).inline,
        "14"
    );
    assert_eq!(rules.substitute("шкала_бека", Some(&text(""))).inline, "");
    assert_eq!(rules.substitute("шкала_бека", None).inline, "");
}

#[test]
fn plain_values_are_stringified() {
    let rules = RuleTable::standard();
    assert_eq!(rules.substitute("возраст", Some(&FieldValue::Number(7))).inline, "7");
    assert_eq!(rules.substitute("возраст", Some(&FieldValue::Number(0))).inline, "");
    assert_eq!(rules.substitute("жалобы", None), Substitution::default());
}

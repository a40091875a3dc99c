use std::fs;
use std::path::Path;

use conclusio_cli::answers::{Answer, Answers, AnswersInput};
use conclusio_cli::commands::{collect, field_entries, generate, list_kinds, preview};
use conclusio_core::form::FormSession;
use conclusio_core::value::FieldValue;
use conclusio_export::catalog::ReportCatalog;
use conclusio_export::docx::read_template;

const CATALOG: &str = r#"{
    "reports": [
        {
            "title": "🧠 Консультативное заключение",
            "template": "template.txt",
            "fields": "fields.json",
            "sections": "sections.json"
        }
    ]
}"#;

const FIELDS: &str = r#"{
    "фио": { "label": "Ф.И.О.", "type": "text" },
    "обучается_в": { "type": "radio", "options": ["детском саду", "школе"] },
    "класс": { "label": "Класс", "type": "radio", "options": ["1", "2", "3"] },
    "шкала_бека": { "label": "Шкала депрессии Бека" },
    "рекомендации": {
        "type": "multiselect",
        "options": ["Консультация невролога", "Занятия с логопедом", "Повторная диагностика"]
    }
}"#;

const SECTIONS: &str = r#"{
    "Общие сведения": ["фио", "обучается_в"],
    "Методики": ["шкала_бека"],
    "Итог": ["рекомендации"]
}"#;

const TEMPLATE: &str = "\
Ф.И.О.: {{фио}}
Обучается в {{обучается_в}} {{класс}}.
Шкала Бека: {{шкала_бека}} баллов, {{шкала_бека_интерпретация}}.
Рекомендовано:{{рекомендации}}";

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in [
        ("reports.json", CATALOG),
        ("fields.json", FIELDS),
        ("sections.json", SECTIONS),
        ("template.txt", TEMPLATE),
    ] {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn load(dir: &Path) -> ReportCatalog {
    ReportCatalog::load(&dir.join("reports.json")).unwrap()
}

const ANSWERS: &str = r#"{
    "фио": "Кузнецов Миша",
    "обучается_в": "школе",
    "класс": "2",
    "шкала_бека": "12",
    "рекомендации": ["Консультация невролога", "Повторная диагностика", "Гадание на кофе"]
}"#;

#[test]
fn answers_parse_numbers_text_and_lists() {
    let answers = Answers::from_json(r#"{ "a": 5, "b": "x", "c": ["y", "z"] }"#).unwrap();
    assert_eq!(answers.get("a"), Some(&Answer::Number(5)));
    assert_eq!(answers.get("b"), Some(&Answer::Text("x".into())));
    assert_eq!(
        answers.get("c"),
        Some(&Answer::List(vec!["y".into(), "z".into()]))
    );
}

#[test]
fn kinds_are_numbered() {
    let dir = fixture();
    assert_eq!(list_kinds(&load(dir.path())), "1. 🧠 Консультативное заключение");
}

#[test]
fn fields_follow_section_layout() {
    let dir = fixture();
    let catalog = load(dir.path());
    let config = catalog.load_report(&catalog.reports[0]).unwrap();

    let entries = field_entries(&config);
    let markers: Vec<_> = entries.iter().map(|e| e.marker.as_str()).collect();
    assert_eq!(markers, vec!["фио", "обучается_в", "шкала_бека", "рекомендации"]);
    assert_eq!(entries[0].section, Some("Общие сведения"));
    assert_eq!(entries[0].label, "Ф.И.О.");
    assert_eq!(entries[1].label, "Обучается в");
}

#[test]
fn collected_state_applies_form_rules() {
    let dir = fixture();
    let catalog = load(dir.path());
    let config = catalog.load_report(&catalog.reports[0]).unwrap();
    let answers = Answers::from_json(ANSWERS).unwrap();

    let state = collect(&config, &answers);
    assert_eq!(state.get("шкала_бека"), Some(&FieldValue::Number(12)));
    assert_eq!(state.render("шкала_бека_интерпретация"), "лёгкое депрессивное состояние");
    assert_eq!(state.render("класс"), "2");
    assert_eq!(
        state.render("рекомендации"),
        "Консультация невролога\nПовторная диагностика"
    );
}

#[test]
fn notices_report_interpretations() {
    let dir = fixture();
    let catalog = load(dir.path());
    let config = catalog.load_report(&catalog.reports[0]).unwrap();
    let answers = Answers::from_json(ANSWERS).unwrap();

    let mut input = AnswersInput::new(&answers);
    FormSession::new(&config).render_all(&mut input);
    assert_eq!(
        input.notices(),
        &[(
            "шкала_бека".to_string(),
            "лёгкое депрессивное состояние".to_string()
        )]
    );
}

#[test]
fn defaults_apply_to_unanswered_fields() {
    let dir = fixture();
    let catalog = load(dir.path());
    let config = catalog.load_report(&catalog.reports[0]).unwrap();
    let answers = Answers::from_json(r#"{ "обучается_в": "в космосе" }"#).unwrap();

    let state = collect(&config, &answers);
    assert_eq!(state.render("обучается_в"), "детском саду");
    assert_eq!(state.get("класс"), Some(&FieldValue::from("")));
    assert_eq!(state.render("фио"), "");
}

#[test]
fn preview_omits_unanswered_scores() {
    let dir = fixture();
    let catalog = load(dir.path());
    let config = catalog.load_report(&catalog.reports[0]).unwrap();
    let answers = Answers::from_json(r#"{ "фио": "Кузнецов Миша", "обучается_в": "школе", "класс": "3" }"#)
        .unwrap();

    assert_eq!(
        preview(&config, &answers),
        "Ф.И.О.: Кузнецов Миша\n\nОбучается в школе 3.\n\nРекомендовано:"
    );
}

#[test]
fn generate_writes_docx_with_expanded_recommendations() {
    let dir = fixture();
    let catalog = load(dir.path());
    let kind = &catalog.reports[0];
    let config = catalog.load_report(kind).unwrap();
    let answers = Answers::from_json(ANSWERS).unwrap();

    let out = dir.path().join("out.docx");
    let written = generate(&catalog, kind, &config, &answers, Some(&out)).unwrap();
    assert_eq!(written, out);

    let report = read_template(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(
        report.paragraphs(),
        &[
            "Ф.И.О.: Кузнецов Миша",
            "Обучается в школе 2 классе.",
            "Шкала Бека: 12 баллов, лёгкое депрессивное состояние.",
            "Рекомендовано:",
            "Консультация невролога",
            "Повторная диагностика",
        ]
    );
}

#[test]
fn demo_catalog_generates_a_complete_report() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let catalog = ReportCatalog::load(&demos.join("reports.json")).unwrap();
    let kind = catalog.find("1").unwrap();
    let config = catalog.load_report(kind).unwrap();
    let answers = Answers::load(&demos.join("answers.json")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(kind.output_file_name());
    generate(&catalog, kind, &config, &answers, Some(&out)).unwrap();

    let report = read_template(&fs::read(&out).unwrap()).unwrap();
    let text = report.paragraphs().join("\n");
    assert!(!text.contains("{{"));
    assert!(text.contains("Обучается в школе 3 классе по адаптированной программе (вариант 7.1)."));
    assert!(text.contains("Отмечаются: гиперопека, непоследовательность требований."));
    assert!(text.contains("Отмечаются: моторная неловкость."));
    assert!(text.contains("Школьная тревожность: 9 стенов, явно повышенная тревожность."));
    assert!(!text.contains("По шкале депрессии Бека"));
    assert!(!text.contains("Межличностная тревожность"));
    assert!(report
        .paragraphs()
        .contains(&"Повторная диагностика через 6 месяцев.".to_string()));
}

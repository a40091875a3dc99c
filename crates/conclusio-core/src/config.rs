use crate::field::FieldSchema;
use crate::rules::RuleTable;
use crate::sections::Sections;
use crate::template::Template;

/// Everything needed to collect and render one kind of report.
///
/// Built once at start-up and shared by reference afterwards; nothing in
/// the pipeline mutates it.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub title: String,
    pub schema: FieldSchema,
    pub sections: Option<Sections>,
    pub template: Template,
    pub rules: RuleTable,
}

impl ReportConfig {
    pub fn new(
        title: impl Into<String>,
        schema: FieldSchema,
        sections: Option<Sections>,
        template: Template,
    ) -> Self {
        Self {
            title: title.into(),
            schema,
            sections,
            template,
            rules: RuleTable::standard(),
        }
    }

    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Markers in form order, each with its section title when the report
    /// has a section layout.
    pub fn form_layout(&self) -> Vec<(Option<&str>, String)> {
        match &self.sections {
            Some(sections) => sections
                .iter()
                .flat_map(|(title, markers)| {
                    markers.iter().map(move |marker| (Some(title), marker.clone()))
                })
                .collect(),
            None => self
                .template
                .markers()
                .into_iter()
                .map(|marker| (None, marker))
                .collect(),
        }
    }
}

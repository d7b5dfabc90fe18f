use eyre::{Context as _, Result};
use handlebars::Handlebars;
use model::{
    record::{Studio, DURATION_MINUTES, PAY_MAX, STUDENTS},
    status::{Severity, StatusMessage},
    summary::SummaryView,
};
use serde::Serialize;
use serde_json::{json, Value};
use strum::IntoEnumIterator as _;

const TITLE: &str = "Yoga Teaching Tracker 🙏";

const TEMPLATES: [(&str, &str); 4] = [
    ("page", include_str!("../templates/page.hbs")),
    ("status", include_str!("../templates/status.hbs")),
    ("summary", include_str!("../templates/summary.hbs")),
    ("form", include_str!("../templates/form.hbs")),
];

/// Compiled page templates. Every value is html-escaped on render.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Views> {
        let mut registry = Handlebars::new();
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .with_context(|| format!("Failed to compile template {}", name))?;
        }
        Ok(Views { registry })
    }

    pub fn page(&self, page: &Page) -> Result<String> {
        self.render("page", &page.data())
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.registry
            .render(name, data)
            .with_context(|| format!("Failed to render template {}", name))
    }
}

pub struct Page<'a> {
    pub statuses: &'a [StatusMessage],
    pub summary: Option<&'a SummaryView>,
    pub class_types: &'a [String],
}

impl Page<'_> {
    fn data(&self) -> Value {
        json!({
            "title": TITLE,
            "statuses": self.statuses.iter().map(status_data).collect::<Vec<_>>(),
            "summary": self.summary,
            "form": form_data(self.class_types),
        })
    }
}

/// The severity picks the marker and css class.
fn status_data(status: &StatusMessage) -> Value {
    let marker = match status.severity {
        Severity::Info => "ℹ️",
        Severity::Success => "✅",
        Severity::Warning => "⚠️",
        Severity::Error => "❌",
    };
    json!({
        "class": status.severity.to_string(),
        "marker": marker,
        "text": status.text,
    })
}

fn form_data(class_types: &[String]) -> Value {
    json!({
        "duration": { "min": DURATION_MINUTES.start(), "max": DURATION_MINUTES.end() },
        "pay_max": PAY_MAX,
        "studios": Studio::iter().map(|studio| studio.to_string()).collect::<Vec<_>>(),
        "class_types": class_types,
        "students": { "min": STUDENTS.start(), "max": STUDENTS.end() },
    })
}

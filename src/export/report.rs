//! Formatted report documents.
//!
//! The HTML report keeps advisory content as-is. The plain-text report strips
//! pictographic symbols so it reads cleanly in viewers without emoji support.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::advisor::{EnvironmentReading, HealthRecommendation};

/// HTML report template
#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    generated_at: String,
    location: Option<&'a str>,
    reading: &'a EnvironmentReading,
    recommendation: &'a HealthRecommendation,
}

/// Everything a report is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub generated_at: DateTime<Utc>,
    pub location: Option<&'a str>,
    pub reading: &'a EnvironmentReading,
    pub recommendation: &'a HealthRecommendation,
}

impl ReportInput<'_> {
    fn timestamp(&self) -> String {
        self.generated_at.format("%d.%m.%Y %H:%M:%S UTC").to_string()
    }
}

/// Render the report as a standalone HTML document.
pub fn render_html(input: ReportInput<'_>) -> Result<String, askama::Error> {
    ReportTemplate {
        generated_at: input.timestamp(),
        location: input.location,
        reading: input.reading,
        recommendation: input.recommendation,
    }
    .render()
}

/// Render the report as plain text without decorative symbols.
pub fn render_text(input: ReportInput<'_>) -> String {
    let rec = input.recommendation;
    let reading = input.reading;
    let mut lines = Vec::new();

    lines.push("HealthAdvisor - Raport Shëndetësor".to_string());
    match input.location {
        Some(place) => lines.push(format!("Data: {} | Lokacioni: {}", input.timestamp(), place)),
        None => lines.push(format!("Data: {}", input.timestamp())),
    }
    lines.push(format!("Niveli i Rrezikut: {}", rec.risk_level.label()));
    lines.push(String::new());

    lines.push("Matjet Mjedisore:".to_string());
    lines.push(format!("- Cilësia e Ajrit: {}", reading.air_quality.label()));
    lines.push(format!("- Temperatura: {}°C", reading.temperature));
    lines.push(format!("- Lagështia: {}%", reading.humidity));
    lines.push(format!("- Niveli i Gazit: {}", reading.gas_level));
    lines.push(String::new());

    push_paragraph(&mut lines, "Përmbledhje:", &rec.summary);
    push_list(&mut lines, "Ushqime të Rekomanduara:", &rec.food);
    push_list(&mut lines, "Pije të Rekomanduara:", &rec.drinks);
    push_list(&mut lines, "Ushtrime Fizike:", &rec.exercises);
    push_paragraph(&mut lines, "Orari i Ecjes:", &rec.walk_schedule);

    lines.push("Masat Paraprake:".to_string());
    lines.push(format!("- Fëmijët: {}", strip_decorations(&rec.precautions.children)));
    lines.push(format!("- Të moshuarit: {}", strip_decorations(&rec.precautions.elderly)));
    lines.push(format!("- Astmatikët: {}", strip_decorations(&rec.precautions.asthmatic)));
    lines.push(String::new());

    push_paragraph(&mut lines, "Kur të Kërkoni Mjekun:", &rec.seek_doctor);

    lines.push("Burimet:".to_string());
    for source in &rec.sources {
        lines.push(format!("- {} ({}) {}", source.title, source.date, source.url));
    }

    lines.join("\n")
}

fn push_paragraph(lines: &mut Vec<String>, title: &str, text: &str) {
    lines.push(title.to_string());
    lines.push(strip_decorations(text));
    lines.push(String::new());
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String]) {
    lines.push(title.to_string());
    lines.extend(items.iter().map(|item| format!("- {}", strip_decorations(item))));
    lines.push(String::new());
}

fn is_decoration(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // emoji and pictographs
            | 0x2600..=0x27BF // misc symbols, dingbats
            | 0x2B00..=0x2BFF // arrows, stars
            | 0xFE00..=0xFE0F // variation selectors
            | 0x200D          // zero-width joiner
            | 0x20E3          // keycap
    )
}

/// Remove pictographic symbols and collapse the whitespace they leave behind.
pub fn strip_decorations(text: &str) -> String {
    let cleaned: String = text.chars().filter(|&c| !is_decoration(c)).collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Output formatting for CLI

use console::style;
use serde::Serialize;
use subline_core::{captions::format_clock, CueView, Diagnostic};
use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

/// Track overview printed by `inspect`
#[derive(Debug, Clone, Serialize)]
pub struct TrackSummary {
    pub file: String,
    pub kind: String,
    pub cues: usize,
    pub sentences: usize,
    pub duration: f64,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lookup result printed by `at`
#[derive(Debug, Clone, Serialize)]
pub struct ActiveCue {
    pub time: f64,
    pub cue: Option<CueView>,
}

#[derive(Tabled)]
struct CueRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Text")]
    text: String,
}

impl From<&CueView> for CueRow {
    fn from(view: &CueView) -> Self {
        let text = match &view.translation {
            Some(translation) => format!("{} / {}", view.text, translation),
            None => view.text.clone(),
        };
        Self {
            index: view.index,
            start: format!("{:.3}", view.start),
            end: format!("{:.3}", view.end),
            text,
        }
    }
}

#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "Property")]
    property: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct DiagnosticRow {
    #[tabled(rename = "Line")]
    line: usize,
    #[tabled(rename = "Reason")]
    reason: String,
}

fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn table<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render a cue listing
pub fn render_cues(entries: &[CueView], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(&entries),
        OutputFormat::Table => Ok(table(entries.iter().map(CueRow::from))),
        OutputFormat::Text => {
            let lines: Vec<String> = entries
                .iter()
                .map(|view| {
                    let mut line = format!(
                        "{:>4}  [{} - {}]  {}",
                        view.index,
                        format_clock(view.start),
                        format_clock(view.end),
                        view.text
                    );
                    if let Some(translation) = &view.translation {
                        line.push_str(&format!("\n      {}", style(translation).dim()));
                    }
                    line
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Render an `inspect` summary
pub fn render_summary(summary: &TrackSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Table => {
            let mut out = table(summary_rows(summary));
            if !summary.diagnostics.is_empty() {
                out.push('\n');
                out.push_str(&table(summary.diagnostics.iter().map(|d| DiagnosticRow {
                    line: d.line,
                    reason: d.kind.to_string(),
                })));
            }
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = format!("{}\n", style(&summary.file).bold());
            for row in summary_rows(summary) {
                out.push_str(&format!("  {:12} {}\n", format!("{}:", row.property), row.value));
            }
            if !summary.diagnostics.is_empty() {
                out.push_str(&format!("\n{}\n", style("Skipped:").yellow()));
                for d in &summary.diagnostics {
                    out.push_str(&format!("  line {}: {}\n", d.line, d.kind));
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn summary_rows(summary: &TrackSummary) -> Vec<PropertyRow> {
    vec![
        PropertyRow { property: "Kind", value: summary.kind.clone() },
        PropertyRow { property: "Cues", value: summary.cues.to_string() },
        PropertyRow { property: "Sentences", value: summary.sentences.to_string() },
        PropertyRow { property: "Duration", value: format_clock(summary.duration) },
        PropertyRow { property: "Skipped", value: summary.diagnostics.len().to_string() },
    ]
}

/// Render an `at` lookup
pub fn render_active(active: &ActiveCue, format: OutputFormat) -> anyhow::Result<String> {
    match (format, &active.cue) {
        (OutputFormat::Json, _) => to_json(active),
        (_, None) => Ok(format!(
            "{} no caption at {:.3}s",
            style("-").dim(),
            active.time
        )),
        (OutputFormat::Table, Some(view)) => Ok(table([CueRow::from(view)])),
        (OutputFormat::Text, Some(view)) => render_cues(std::slice::from_ref(view), OutputFormat::Text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subline_core::DiagnosticKind;

    fn view(index: usize, text: &str) -> CueView {
        CueView {
            index,
            start: index as f64,
            end: index as f64 + 1.0,
            text: text.to_string(),
            translation: None,
        }
    }

    #[test]
    fn test_cues_json_is_parseable() {
        let out = render_cues(&[view(0, "Hello")], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["text"], "Hello");
        assert!(value[0].get("translation").is_none());
    }

    #[test]
    fn test_cues_table_has_headers() {
        let out = render_cues(&[view(0, "Hello"), view(1, "World")], OutputFormat::Table).unwrap();
        assert!(out.contains("Start"));
        assert!(out.contains("World"));
    }

    #[test]
    fn test_summary_lists_diagnostics() {
        let summary = TrackSummary {
            file: "talk.vtt".into(),
            kind: "WebVTT".into(),
            cues: 2,
            sentences: 3,
            duration: 65.0,
            diagnostics: vec![Diagnostic::new(7, DiagnosticKind::InvalidInterval)],
        };
        let text = render_summary(&summary, OutputFormat::Text).unwrap();
        assert!(text.contains("01:05"));
        assert!(text.contains("line 7"));

        let json = render_summary(&summary, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cues"], 2);
    }

    #[test]
    fn test_active_none() {
        let active = ActiveCue { time: 2.5, cue: None };
        assert!(render_active(&active, OutputFormat::Text).unwrap().contains("2.500"));
        let json = render_active(&active, OutputFormat::Json).unwrap();
        assert!(json.contains("null"));
    }
}

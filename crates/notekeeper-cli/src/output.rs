//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use notekeeper_core::{BuildReport, DiaryOutcome, IntegrationOutcome, TitleReport};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a created draft.
    pub fn draft_created(&self, path: &Path) -> String {
        self.success(&format!("Created template: {}", path.display()))
    }

    /// Format the outcome of a diary request.
    pub fn diary(&self, outcome: &DiaryOutcome) -> String {
        match outcome {
            DiaryOutcome::Created(path) => {
                self.success(&format!("Created diary note: {}", path.display()))
            }
            DiaryOutcome::AlreadyExists(path) => {
                self.warning(&format!("File {} already exists.", path.display()))
            }
        }
    }

    /// Format the outcome of a topic integration.
    pub fn integration(&self, outcome: &IntegrationOutcome) -> String {
        match outcome {
            IntegrationOutcome::Integrated { output, fragments } => self.success(&format!(
                "Integrated {} files into {}",
                fragments,
                output.display()
            )),
            IntegrationOutcome::NothingToIntegrate => {
                self.warning("No .adoc files found to integrate.")
            }
        }
    }

    /// Format the files written by an index build.
    pub fn build_report(&self, report: &BuildReport) -> String {
        let mut lines = vec![
            self.success(&format!("Index written to {}", report.index_path.display())),
            self.success(&format!(
                "Knowledge graph written to {} ({} nodes, {} edges)",
                report.graph_path.display(),
                report.graph.node_count(),
                report.graph.edge_count()
            )),
        ];
        if let Some(path) = &report.absolute_graph_path {
            lines.push(self.success(&format!(
                "Absolute path knowledge graph written to {}",
                path.display()
            )));
        }
        lines.join("\n")
    }

    /// Format a multiple-title report.
    pub fn title_reports(&self, reports: &[TitleReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.title_reports_json(reports),
            OutputFormat::Table => Ok(self.title_reports_table(reports)),
            OutputFormat::Quiet => Ok(reports
                .iter()
                .map(|r| r.file.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn title_reports_json(&self, reports: &[TitleReport]) -> Result<String> {
        let json: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| {
                serde_json::json!({
                    "file": r.file,
                    "titles": r.count,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn title_reports_table(&self, reports: &[TitleReport]) -> String {
        if reports.is_empty() {
            return self.colorize("No notes with multiple titles.", "green");
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Titles"]);
        for report in reports {
            builder.push_record([report.file.clone(), report.count.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn reports() -> Vec<TitleReport> {
        vec![TitleReport {
            file: "merged.adoc".to_string(),
            count: 3,
        }]
    }

    #[test]
    fn test_integration_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let done = IntegrationOutcome::Integrated {
            output: PathBuf::from("notes/rust.adoc"),
            fragments: 2,
        };
        assert_eq!(
            formatter.integration(&done),
            "✓ Integrated 2 files into notes/rust.adoc"
        );
        assert_eq!(
            formatter.integration(&IntegrationOutcome::NothingToIntegrate),
            "⚠ No .adoc files found to integrate."
        );
    }

    #[test]
    fn test_diary_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let path = PathBuf::from("diary_notes/note_x.md");
        assert!(formatter
            .diary(&DiaryOutcome::AlreadyExists(path.clone()))
            .contains("already exists"));
        assert!(formatter
            .diary(&DiaryOutcome::Created(path))
            .starts_with("✓ Created diary note"));
    }

    #[test]
    fn test_titles_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.title_reports(&reports()).unwrap();
        assert!(output.contains("File"));
        assert!(output.contains("merged.adoc"));
    }

    #[test]
    fn test_titles_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.title_reports(&reports()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["file"], "merged.adoc");
        assert_eq!(parsed[0]["titles"], 3);
    }

    #[test]
    fn test_titles_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.title_reports(&reports()).unwrap(), "merged.adoc");
    }

    #[test]
    fn test_empty_titles_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.title_reports(&[]).unwrap();
        assert!(output.contains("No notes with multiple titles"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}

//! Display and output formatting utilities

use crate::analysis::Label;
use crate::config::OutputFormat;
use crate::puzzle::PuzzleReport;
use anyhow::Result;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Format classification reports for display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format the three derived answers for console output
    pub fn format_answers(report: &PuzzleReport) -> String {
        let mut output = String::new();

        output.push_str("Answers:\n");
        output.push_str(&format!(
            "  Minimum losing-in-1 state:   {}\n",
            Self::format_optional(report.answers.min_lose_in_one)
        ));
        let pair = if report.answers.win_in_two_pair.is_empty() {
            "none".to_string()
        } else {
            report.answers.win_in_two_pair.iter().join(", ")
        };
        output.push_str(&format!("  Two smallest winning-in-2:   {}\n", pair));
        output.push_str(&format!(
            "  Minimum losing-in-2 state:   {}\n",
            Self::format_optional(report.answers.min_lose_in_two)
        ));

        output
    }

    /// Format the game description and per-label counts
    pub fn format_summary(report: &PuzzleReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("Terminal condition: {}\n", report.terminal));
        output.push_str(&format!("Moves: {}\n", report.move_names.iter().join(", ")));
        match report.scan_span {
            Some((lo, hi)) => {
                output.push_str(&format!(
                    "Scanned {} states in [{}, {}]\n",
                    report.scanned_states, lo, hi
                ));
            }
            None => output.push_str("Scanned 0 states (empty interval)\n"),
        }

        output.push_str("Label counts:\n");
        for label in Label::all() {
            output.push_str(&format!(
                "  {:10} {}\n",
                label.code(),
                report.count_of(label)
            ));
        }

        output
    }

    /// Format the full state → label table, optionally restricted to one
    /// label
    pub fn format_label_table(report: &PuzzleReport, only: Option<Label>) -> String {
        let mut output = String::new();
        output.push_str("State      Label\n");
        output.push_str("---------  -----\n");
        for (s, label) in report.classification.iter() {
            if only.map_or(true, |l| l == label) {
                output.push_str(&format!("{:<9}  {}\n", s, label.code()));
            }
        }
        output
    }

    /// Save the report into a directory in the requested format,
    /// returning the written path
    pub fn save_report<P: AsRef<Path>>(
        report: &PuzzleReport,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        let path = match format {
            OutputFormat::Text => {
                let path = output_dir.join("report.txt");
                let mut content = Self::format_summary(report);
                content.push('\n');
                content.push_str(&Self::format_answers(report));
                content.push('\n');
                content.push_str(&Self::format_label_table(report, None));
                std::fs::write(&path, content)?;
                path
            }
            OutputFormat::Json => {
                let path = output_dir.join("report.json");
                let content = serde_json::to_string_pretty(report)?;
                std::fs::write(&path, content)?;
                path
            }
        };

        Ok(path)
    }

    fn format_optional(value: Option<i64>) -> String {
        value.map_or_else(|| "none".to_string(), |v| v.to_string())
    }
}

/// ANSI-colored status strings for console output
pub struct ColorOutput;

impl ColorOutput {
    /// Informational message (blue)
    pub fn info(message: &str) -> String {
        format!("\x1b[34m{}\x1b[0m", message)
    }

    /// Success message (green)
    pub fn success(message: &str) -> String {
        format!("\x1b[32m{}\x1b[0m", message)
    }

    /// Warning message (yellow)
    pub fn warning(message: &str) -> String {
        format!("\x1b[33m{}\x1b[0m", message)
    }

    /// Error message (red)
    pub fn error(message: &str) -> String {
        format!("\x1b[31m{}\x1b[0m", message)
    }
}

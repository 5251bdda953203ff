//! Output formatting for the Contact Shape Auditor CLI
//!
//! Renders audit reports as JSON, YAML, or a colored human-readable
//! table.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::contracts::AuditReport;
use crate::error::AuditError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format for configuration output
    Yaml,
}

/// Audit report output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Outcome classification
    pub outcome: String,
    /// Audited source
    pub source: String,
    /// Number of contacts scanned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<usize>,
    /// Position of the matching contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_index: Option<usize>,
    /// Role of the matching contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_role: Option<String>,
    /// Tags of the matching contact
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_tags: Vec<String>,
    /// Whether a sample record was emitted
    pub sampled: bool,
    /// Error message for failed audits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Summary message
    pub summary: String,
    /// Audit duration in milliseconds
    pub duration_ms: u64,
}

impl ReportOutput {
    /// Create output from an audit report
    pub fn from_report(report: &AuditReport) -> Self {
        Self {
            outcome: report.outcome.as_str().to_string(),
            source: report.source.clone(),
            contact_count: report.contact_count,
            matched_index: report.matched_index,
            matched_role: report.matched_role.clone(),
            matched_tags: report.matched_tags.clone(),
            sampled: report.sampled,
            error: report.error.clone(),
            summary: report.summary(),
            duration_ms: report.duration_ms,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), AuditError> {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Yaml => self.render_yaml(),
            OutputFormat::Table => self.render_table(),
        }
    }

    /// Render as JSON
    fn render_json(&self) -> Result<(), AuditError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AuditError::Serialization(e.to_string()))?;
        println!("{}", json);
        Ok(())
    }

    /// Render as YAML
    fn render_yaml(&self) -> Result<(), AuditError> {
        let yaml =
            serde_yaml::to_string(self).map_err(|e| AuditError::Serialization(e.to_string()))?;
        println!("{}", yaml);
        Ok(())
    }

    /// Render as human-readable table
    fn render_table(&self) -> Result<(), AuditError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Contact Audit Report".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        let (icon, label) = match self.outcome.as_str() {
            "matched" => ("+".green(), "MATCHED".green().bold()),
            "no_match" => ("-".yellow(), "NO MATCH".yellow().bold()),
            "inconclusive" => ("?".yellow(), "INCONCLUSIVE".yellow().bold()),
            _ => ("x".red(), "FAILED".red().bold()),
        };
        writeln!(stdout, "{} {} {}", icon, label, self.source.cyan()).ok();
        writeln!(stdout).ok();

        if let Some(count) = self.contact_count {
            writeln!(stdout, "  {} {}", "Contacts:".dimmed(), count).ok();
        }

        if let Some(index) = self.matched_index {
            writeln!(
                stdout,
                "  {} {}",
                "Match index:".dimmed(),
                index.to_string().green()
            )
            .ok();

            if !self.matched_tags.is_empty() {
                writeln!(
                    stdout,
                    "  {} {}",
                    "Tags:".dimmed(),
                    self.matched_tags.join(", ").green()
                )
                .ok();
            }

            match &self.matched_role {
                Some(role) => writeln!(stdout, "  {} {}", "Role:".dimmed(), role).ok(),
                None => writeln!(stdout, "  {} {}", "Role:".dimmed(), "(none)".dimmed()).ok(),
            };
        }

        if self.sampled {
            writeln!(
                stdout,
                "  {} {}",
                "Sample:".dimmed(),
                "first record echoed to the log"
            )
            .ok();
        }

        if let Some(error) = &self.error {
            writeln!(stdout, "  {} {}", "Error:".dimmed(), error.red()).ok();
        }

        writeln!(stdout).ok();
        writeln!(
            stdout,
            "Completed in {} ms",
            self.duration_ms.to_string().dimmed()
        )
        .ok();

        stdout.flush().ok();
        Ok(())
    }
}

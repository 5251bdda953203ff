//! CLI command definitions for the Contact Shape Auditor
//!
//! Clap-based commands for auditing a live endpoint or a captured
//! envelope body.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::output::{OutputFormat, ReportOutput};
use super::ExitCode;
use crate::engine::AuditEngine;
use crate::error::AuditError;
use crate::telemetry::TracingSink;

/// Contact Shape Auditor CLI
///
/// Fetch a contact collection endpoint, check the envelope shape, and
/// report the first contact carrying a non-empty tag list.
#[derive(Parser, Debug)]
#[command(name = "contact-audit")]
#[command(about = "Contact Shape Auditor - check contact envelopes for tagged records", long_about = None)]
#[command(version)]
pub struct AuditCli {
    /// Emit log entries as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress the report rendering, keep log entries only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: AuditCommands,
}

/// Available audit commands
#[derive(Subcommand, Debug)]
pub enum AuditCommands {
    /// Audit the envelope served by an endpoint
    ///
    /// Issues a single GET request, with no retries and no request
    /// timeout, and scans the returned contacts for the first record
    /// with a non-empty tag list.
    Audit {
        /// Endpoint URL serving the contact envelope
        #[arg(short, long, env = "CONTACT_AUDIT_ENDPOINT")]
        endpoint: String,

        /// Output format for the audit report
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Audit a captured envelope body from disk
    ///
    /// Runs the identical shape audit on a recorded response without
    /// touching the network.
    Inspect {
        /// Path to the captured envelope body (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format for the audit report
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },
}

/// Execute the audit command
pub async fn execute_audit(
    endpoint: String,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<ExitCode, AuditError> {
    let url = reqwest::Url::parse(&endpoint)
        .map_err(|e| AuditError::InvalidInput(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AuditError::InvalidInput(format!(
            "Unsupported endpoint scheme '{}', expected http or https",
            url.scheme()
        )));
    }

    let engine = AuditEngine::new();
    let report = engine.audit(&endpoint, &TracingSink).await;

    if !quiet {
        let output_format = format.unwrap_or(OutputFormat::Table);
        let output = ReportOutput::from_report(&report);
        output.render(output_format)?;
    }

    Ok(ExitCode::from_outcome(report.outcome))
}

/// Execute the inspect command
pub fn execute_inspect(
    file: PathBuf,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<ExitCode, AuditError> {
    let body = std::fs::read_to_string(&file).map_err(|e| {
        AuditError::File(format!(
            "Failed to read envelope file '{}': {}",
            file.display(),
            e
        ))
    })?;

    let engine = AuditEngine::new();
    let source = file.display().to_string();
    let report = engine.audit_body(&source, &body, &TracingSink);

    if !quiet {
        let output_format = format.unwrap_or(OutputFormat::Table);
        let output = ReportOutput::from_report(&report);
        output.render(output_format)?;
    }

    Ok(ExitCode::from_outcome(report.outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_audit_command() {
        let cli = AuditCli::try_parse_from([
            "contact-audit",
            "audit",
            "--endpoint",
            "http://localhost:8080/contacts",
        ])
        .unwrap();

        match cli.command {
            AuditCommands::Audit { endpoint, format } => {
                assert_eq!(endpoint, "http://localhost:8080/contacts");
                assert_eq!(format, Some(OutputFormat::Table));
            }
            other => panic!("expected audit command, got {:?}", other),
        }
        assert!(!cli.quiet);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_parse_inspect_command_with_format() {
        let cli = AuditCli::try_parse_from([
            "contact-audit",
            "--quiet",
            "inspect",
            "--file",
            "envelope.json",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            AuditCommands::Inspect { file, format } => {
                assert_eq!(file, PathBuf::from("envelope.json"));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("expected inspect command, got {:?}", other),
        }
        assert!(cli.quiet);
    }

    #[test]
    fn test_audit_requires_endpoint() {
        let result = AuditCli::try_parse_from(["contact-audit", "audit"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_audit_rejects_malformed_endpoint() {
        let result = tokio_test::block_on(execute_audit("not a url".to_string(), None, true));
        assert!(matches!(result, Err(AuditError::InvalidInput(_))));
    }

    #[test]
    fn test_execute_audit_rejects_unsupported_scheme() {
        let result = tokio_test::block_on(execute_audit(
            "ftp://example.com/contacts".to_string(),
            None,
            true,
        ));
        assert!(matches!(result, Err(AuditError::InvalidInput(_))));
    }

    #[test]
    fn test_execute_inspect_missing_file() {
        let result = execute_inspect(PathBuf::from("/nonexistent/envelope.json"), None, true);
        assert!(matches!(result, Err(AuditError::File(_))));
    }
}

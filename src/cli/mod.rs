//! CLI module for the Contact Shape Auditor
//!
//! Command dispatch, exit codes, and report rendering for the audit
//! binary.

pub mod commands;
pub mod output;

pub use commands::{AuditCli, AuditCommands};
pub use output::{OutputFormat, ReportOutput};

use crate::contracts::OutcomeKind;
use crate::error::AuditError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Audit ran to completion, whatever it reported
    Success = 0,
    /// Envelope fetch failed
    FetchFailure = 1,
    /// Envelope body could not be parsed
    ParseFailure = 2,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from an audit outcome
    ///
    /// Reported outcomes all map to success; only fetch and parse
    /// failures terminate with a non-zero code.
    pub fn from_outcome(outcome: OutcomeKind) -> Self {
        match outcome {
            OutcomeKind::Matched | OutcomeKind::NoMatch | OutcomeKind::Inconclusive => {
                ExitCode::Success
            }
            OutcomeKind::FetchFailed => ExitCode::FetchFailure,
            OutcomeKind::ParseFailed => ExitCode::ParseFailure,
        }
    }

    /// Determine exit code from a CLI error
    pub fn from_error(error: &AuditError) -> Self {
        match error {
            AuditError::Fetch(_) => ExitCode::FetchFailure,
            AuditError::Parse(_) => ExitCode::ParseFailure,
            AuditError::InvalidInput(_) => ExitCode::InvalidInput,
            AuditError::File(_) => ExitCode::FileError,
            AuditError::Serialization(_) => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub async fn run(cli: AuditCli) -> Result<ExitCode, AuditError> {
    match cli.command {
        AuditCommands::Audit { endpoint, format } => {
            commands::execute_audit(endpoint, format, cli.quiet).await
        }
        AuditCommands::Inspect { file, format } => {
            commands::execute_inspect(file, format, cli.quiet)
        }
    }
}

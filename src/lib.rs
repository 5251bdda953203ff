//! Contact Shape Auditor
//!
//! Fetches a contact collection endpoint, validates the response
//! envelope, and reports the first contact carrying a non-empty tag
//! list. Fetch and parse failures are absorbed at the audit boundary:
//! they surface as a single error log entry and a failed report,
//! never as a propagated error.
//!
//! # Design Principles
//! - Deterministic: the same envelope body always produces the same
//!   outcome and the same log entry sequence
//! - Single request: one GET, no retries, no request timeout
//! - Traceable: every run yields an AuditReport with an inputs hash

pub mod cli;
pub mod client;
pub mod engine;
pub mod error;
pub mod telemetry;

// Re-export contracts
#[path = "../contracts/mod.rs"]
pub mod contracts;

pub use contracts::*;

pub use cli::{AuditCli, AuditCommands, ExitCode, OutputFormat, ReportOutput};
pub use client::ContactsClient;
pub use engine::AuditEngine;
pub use error::{AuditError, FetchError, ParseError};
pub use telemetry::{AuditSink, MemorySink, TracingSink};

/// Auditor version (from Cargo.toml)
pub const AUDITOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
pub async fn run_cli(cli: AuditCli) -> ExitCode {
    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}

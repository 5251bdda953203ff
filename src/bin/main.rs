//! Contact Shape Auditor entry point
//!
//! # Usage
//!
//! ```bash
//! # Audit a live endpoint
//! contact-audit audit --endpoint https://api.example.com/contacts
//!
//! # Audit a captured envelope body
//! contact-audit inspect --file fixtures/envelope.json
//!
//! # Machine-readable report and JSON log lines
//! contact-audit --log-json audit --endpoint https://api.example.com/contacts --format json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Audit completed (matched, no match, or inconclusive)
//! - 1: Envelope fetch failed
//! - 2: Envelope body could not be parsed
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use contact_audit::{run_cli, AuditCli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = AuditCli::parse();

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );

    if cli.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    let exit_code = run_cli(cli).await;
    std::process::exit(exit_code.into());
}

//! Audit report record
//!
//! Machine-readable record of a completed audit run. The report rides
//! alongside the log entries; it never replaces them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuditOutcome;

/// Record of a single audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unique report identifier
    pub report_id: Uuid,

    /// Auditor identifier
    pub auditor_id: String,

    /// Auditor version
    pub auditor_version: String,

    /// Audited source (endpoint URL or file path)
    pub source: String,

    /// Outcome classification
    pub outcome: OutcomeKind,

    /// Contacts reported by the envelope, when the scan ran
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

    /// Hash of the audited inputs for deduplication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs_hash: Option<String>,

    /// Error message when the audit failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Audit start timestamp
    pub started_at: DateTime<Utc>,

    /// Completion timestamp
    pub completed_at: DateTime<Utc>,

    /// Total duration in milliseconds
    pub duration_ms: u64,
}

impl AuditReport {
    pub const AUDITOR_ID: &'static str = "contact-shape-auditor";
    pub const AUDITOR_VERSION: &'static str = "0.1.0";

    /// Create from an evaluated outcome
    pub fn from_outcome(
        source: impl Into<String>,
        outcome: &AuditOutcome,
        inputs_hash: String,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut report = Self::base(source, outcome.kind(), started_at);
        report.contact_count = outcome.contact_count();
        report.inputs_hash = Some(inputs_hash);

        match outcome {
            AuditOutcome::Matched { index, contact, .. } => {
                report.matched_index = Some(*index);
                report.matched_role = contact.role.clone();
                report.matched_tags = contact.tags.clone().unwrap_or_default();
            }
            AuditOutcome::NoMatch { sample, .. } => {
                report.sampled = sample.is_some();
            }
            AuditOutcome::Inconclusive { .. } => {}
        }

        report
    }

    /// Create for a failed audit
    pub fn failed(
        source: impl Into<String>,
        outcome: OutcomeKind,
        error: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut report = Self::base(source, outcome, started_at);
        report.error = Some(error.into());
        report
    }

    fn base(source: impl Into<String>, outcome: OutcomeKind, started_at: DateTime<Utc>) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            auditor_id: Self::AUDITOR_ID.to_string(),
            auditor_version: Self::AUDITOR_VERSION.to_string(),
            source: source.into(),
            outcome,
            contact_count: None,
            matched_index: None,
            matched_role: None,
            matched_tags: Vec::new(),
            sampled: false,
            inputs_hash: None,
            error: None,
            started_at,
            completed_at: Utc::now(),
            duration_ms: 0,
        }
    }

    /// Set duration
    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Check if the audit ran to completion
    pub fn is_reported_outcome(&self) -> bool {
        matches!(
            self.outcome,
            OutcomeKind::Matched | OutcomeKind::NoMatch | OutcomeKind::Inconclusive
        )
    }

    /// Get summary
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} - source={}, contacts={}, duration={}ms",
            self.auditor_id,
            self.outcome.as_str(),
            self.source,
            self.contact_count
                .map_or_else(|| "n/a".to_string(), |count| count.to_string()),
            self.duration_ms,
        )
    }
}

/// Audit outcome classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// A contact with a non-empty tag list was found
    Matched,
    /// The collection was scanned and no contact carries tags
    NoMatch,
    /// Envelope did not report a usable collection
    Inconclusive,
    /// The fetch failed before a body was read
    FetchFailed,
    /// The body could not be parsed as an envelope
    ParseFailed,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::NoMatch => "no_match",
            Self::Inconclusive => "inconclusive",
            Self::FetchFailed => "fetch_failed",
            Self::ParseFailed => "parse_failed",
        }
    }
}

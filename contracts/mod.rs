//! Contact Shape Auditor contracts
//!
//! Defines the envelope wire model, audit outcomes, and the structured
//! log entries every audit emits.

mod audit_report;
mod envelope;

pub use audit_report::*;
pub use envelope::*;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Result of evaluating an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    /// Envelope did not report a usable collection
    Inconclusive {
        /// The raw envelope body, echoed for diagnostics
        envelope: Value,
    },

    /// A contact with a non-empty tag list was found
    Matched {
        /// Total contacts in the collection
        total: usize,
        /// Position of the match, by collection order
        index: usize,
        /// The matching record
        contact: Contact,
    },

    /// No contact carries a non-empty tag list
    NoMatch {
        /// Total contacts in the collection
        total: usize,
        /// First record of the collection, when it has one
        sample: Option<Contact>,
    },
}

impl AuditOutcome {
    /// Outcome classification for reporting
    pub fn kind(&self) -> OutcomeKind {
        match self {
            AuditOutcome::Inconclusive { .. } => OutcomeKind::Inconclusive,
            AuditOutcome::Matched { .. } => OutcomeKind::Matched,
            AuditOutcome::NoMatch { .. } => OutcomeKind::NoMatch,
        }
    }

    /// Contacts reported by the envelope, when the scan ran
    pub fn contact_count(&self) -> Option<usize> {
        match self {
            AuditOutcome::Inconclusive { .. } => None,
            AuditOutcome::Matched { total, .. } | AuditOutcome::NoMatch { total, .. } => {
                Some(*total)
            }
        }
    }

    /// Log entries for this outcome, in emission order
    ///
    /// The sequence is fixed per outcome: an inconclusive envelope
    /// yields exactly one entry, a match yields the count and the
    /// matching record, and a miss yields the count, a not-found
    /// entry, and one sample when the collection is non-empty.
    pub fn log_entries(&self) -> Vec<AuditEntry> {
        match self {
            AuditOutcome::Inconclusive { envelope } => {
                vec![AuditEntry::inconclusive(envelope.clone())]
            }
            AuditOutcome::Matched { total, index, contact } => vec![
                AuditEntry::contact_count(*total),
                AuditEntry::tagged_contact(*index, contact),
            ],
            AuditOutcome::NoMatch { total, sample } => {
                let mut entries = vec![AuditEntry::contact_count(*total), AuditEntry::not_found()];
                if let Some(sample) = sample {
                    entries.push(AuditEntry::sample(sample));
                }
                entries
            }
        }
    }
}

/// A single structured log entry emitted by an audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry severity
    pub level: EntryLevel,

    /// Entry classification
    pub kind: EntryKind,

    /// Human-readable message
    pub message: String,

    /// Structured payload
    pub payload: Value,
}

impl AuditEntry {
    /// Envelope did not report a usable collection
    pub fn inconclusive(envelope: Value) -> Self {
        Self {
            level: EntryLevel::Info,
            kind: EntryKind::AuditInconclusive,
            message: "Contact audit inconclusive".to_string(),
            payload: json!({ "envelope": envelope }),
        }
    }

    /// Count of contacts in the collection
    pub fn contact_count(total: usize) -> Self {
        Self {
            level: EntryLevel::Info,
            kind: EntryKind::ContactCount,
            message: format!("Contacts found: {}", total),
            payload: json!({ "count": total }),
        }
    }

    /// First contact carrying tags, with its full record
    pub fn tagged_contact(index: usize, contact: &Contact) -> Self {
        Self {
            level: EntryLevel::Info,
            kind: EntryKind::TaggedContact,
            message: "Tagged contact found".to_string(),
            payload: json!({
                "index": index,
                "contact": contact,
                "tags": contact.tags.clone().unwrap_or_default(),
                "role": contact.role.clone(),
            }),
        }
    }

    /// No contact carries tags
    pub fn not_found() -> Self {
        Self {
            level: EntryLevel::Info,
            kind: EntryKind::NotFound,
            message: "No tagged contact found".to_string(),
            payload: Value::Null,
        }
    }

    /// Sample record emitted alongside a not-found result
    pub fn sample(contact: &Contact) -> Self {
        Self {
            level: EntryLevel::Info,
            kind: EntryKind::Sample,
            message: "Sample contact".to_string(),
            payload: json!({ "contact": contact }),
        }
    }

    /// Audit terminated by a fetch or parse failure
    pub fn failure(kind: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            level: EntryLevel::Error,
            kind: EntryKind::AuditFailed,
            message: format!("Contact audit failed: {}", message),
            payload: json!({ "error_kind": kind, "error": message }),
        }
    }
}

/// Log entry classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Envelope unusable, audit ended early
    AuditInconclusive,
    /// Count of contacts in the collection
    ContactCount,
    /// First contact carrying tags
    TaggedContact,
    /// No contact carries tags
    NotFound,
    /// Sample record for diagnostics
    Sample,
    /// Fetch or parse failure
    AuditFailed,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuditInconclusive => "audit_inconclusive",
            Self::ContactCount => "contact_count",
            Self::TaggedContact => "tagged_contact",
            Self::NotFound => "not_found",
            Self::Sample => "sample",
            Self::AuditFailed => "audit_failed",
        }
    }
}

/// Log entry severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryLevel {
    /// Informational, reported outcome
    Info,
    /// Audit failure
    Error,
}

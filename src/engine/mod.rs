//! Contact audit engine
//!
//! Deterministic evaluation of contact envelopes. Fetch and parse
//! failures are absorbed here: they become a single error log entry
//! and a failed report, never a propagated error.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::time::Instant;

use crate::client::{parse_envelope, ContactsClient};
use crate::contracts::{AuditEntry, AuditOutcome, AuditReport, EnvelopeDocument, OutcomeKind};
use crate::telemetry::AuditSink;

/// Contact shape audit engine
pub struct AuditEngine {
    client: ContactsClient,
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditEngine {
    /// Create new engine
    pub fn new() -> Self {
        Self {
            client: ContactsClient::new(),
        }
    }

    /// Create engine with a custom client
    pub fn with_client(client: ContactsClient) -> Self {
        Self { client }
    }

    /// Audit the envelope served by an endpoint
    ///
    /// Issues one GET request, awaited to completion, then evaluates
    /// the body. Every outcome reaches the sink as log entries; fetch
    /// and parse failures surface as a single error entry.
    pub async fn audit(&self, endpoint: &str, sink: &dyn AuditSink) -> AuditReport {
        let start = Instant::now();
        let started_at = Utc::now();

        tracing::debug!(endpoint, "Fetching contact envelope");

        let body = match self.client.fetch_body(endpoint).await {
            Ok(body) => body,
            Err(e) => {
                return Self::fail(
                    endpoint,
                    OutcomeKind::FetchFailed,
                    e.to_string(),
                    sink,
                    started_at,
                    start,
                )
            }
        };

        Self::run_audit(endpoint, &body, sink, started_at, start)
    }

    /// Audit an envelope body without fetching
    ///
    /// Runs the identical evaluation on a captured body, with the
    /// source recorded in place of an endpoint.
    pub fn audit_body(&self, source: &str, body: &str, sink: &dyn AuditSink) -> AuditReport {
        let start = Instant::now();
        let started_at = Utc::now();
        Self::run_audit(source, body, sink, started_at, start)
    }

    fn run_audit(
        source: &str,
        body: &str,
        sink: &dyn AuditSink,
        started_at: DateTime<Utc>,
        start: Instant,
    ) -> AuditReport {
        let document = match parse_envelope(body) {
            Ok(document) => document,
            Err(e) => {
                return Self::fail(
                    source,
                    OutcomeKind::ParseFailed,
                    e.to_string(),
                    sink,
                    started_at,
                    start,
                )
            }
        };

        let outcome = Self::evaluate(&document);
        tracing::debug!(source, outcome = outcome.kind().as_str(), "Envelope evaluated");

        for entry in outcome.log_entries() {
            sink.emit(&entry);
        }

        let inputs_hash = Self::compute_inputs_hash(source, &document.raw);
        AuditReport::from_outcome(source, &outcome, inputs_hash, started_at)
            .with_duration(start.elapsed().as_millis() as u64)
    }

    fn fail(
        source: &str,
        outcome: OutcomeKind,
        message: String,
        sink: &dyn AuditSink,
        started_at: DateTime<Utc>,
        start: Instant,
    ) -> AuditReport {
        sink.emit(&AuditEntry::failure(outcome.as_str(), message.clone()));
        AuditReport::failed(source, outcome, message, started_at)
            .with_duration(start.elapsed().as_millis() as u64)
    }

    /// Evaluate a parsed envelope
    ///
    /// Pure scan, no I/O: the same document always produces the same
    /// outcome. A falsy `success` or an absent collection short-circuits
    /// to inconclusive; otherwise the first contact with a non-empty
    /// tag list wins, by collection order.
    pub fn evaluate(document: &EnvelopeDocument) -> AuditOutcome {
        let envelope = &document.envelope;

        let contacts = match &envelope.contacts {
            Some(contacts) if envelope.success => contacts,
            _ => {
                return AuditOutcome::Inconclusive {
                    envelope: document.raw.clone(),
                }
            }
        };

        let matched = contacts
            .iter()
            .enumerate()
            .find(|(_, contact)| contact.has_tags());

        match matched {
            Some((index, contact)) => AuditOutcome::Matched {
                total: contacts.len(),
                index,
                contact: contact.clone(),
            },
            None => AuditOutcome::NoMatch {
                total: contacts.len(),
                sample: contacts.first().cloned(),
            },
        }
    }

    /// Compute deterministic hash of the audited source and body
    pub fn compute_inputs_hash(source: &str, raw: &Value) -> String {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        if let Ok(body_json) = serde_json::to_string(raw) {
            hasher.update(body_json.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::EntryKind;
    use crate::telemetry::MemorySink;
    use serde_json::json;

    fn document(value: Value) -> EnvelopeDocument {
        EnvelopeDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_evaluate_failed_envelope_is_inconclusive() {
        let raw = json!({ "success": false });
        let outcome = AuditEngine::evaluate(&document(raw.clone()));
        assert_eq!(outcome, AuditOutcome::Inconclusive { envelope: raw });
    }

    #[test]
    fn test_evaluate_missing_contacts_is_inconclusive() {
        let outcome = AuditEngine::evaluate(&document(json!({ "success": true })));
        assert!(matches!(outcome, AuditOutcome::Inconclusive { .. }));

        let outcome =
            AuditEngine::evaluate(&document(json!({ "success": true, "contacts": null })));
        assert!(matches!(outcome, AuditOutcome::Inconclusive { .. }));
    }

    #[test]
    fn test_evaluate_first_tagged_contact_wins() {
        let outcome = AuditEngine::evaluate(&document(json!({
            "success": true,
            "contacts": [
                { "name": "Ada", "tags": [], "role": "ops" },
                { "name": "Grace", "tags": ["vip"], "role": "admin" },
                { "name": "Alan", "tags": ["vip", "beta"], "role": "dev" },
            ],
        })));

        match outcome {
            AuditOutcome::Matched { total, index, contact } => {
                assert_eq!(total, 3);
                assert_eq!(index, 1);
                assert_eq!(contact.role, Some("admin".to_string()));
                assert_eq!(contact.tags, Some(vec!["vip".to_string()]));
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_empty_collection_has_no_sample() {
        let outcome =
            AuditEngine::evaluate(&document(json!({ "success": true, "contacts": [] })));
        assert_eq!(
            outcome,
            AuditOutcome::NoMatch {
                total: 0,
                sample: None
            }
        );
    }

    #[test]
    fn test_evaluate_untagged_collection_samples_first() {
        let outcome = AuditEngine::evaluate(&document(json!({
            "success": true,
            "contacts": [
                { "name": "Ada", "tags": [] },
                { "name": "Alan" },
            ],
        })));

        match outcome {
            AuditOutcome::NoMatch { total, sample } => {
                assert_eq!(total, 2);
                let sample = sample.expect("non-empty collection yields a sample");
                assert_eq!(sample.extra["name"], "Ada");
            }
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_null_tags_do_not_match() {
        let outcome = AuditEngine::evaluate(&document(json!({
            "success": true,
            "contacts": [{ "name": "Ada", "tags": null }],
        })));
        assert!(matches!(outcome, AuditOutcome::NoMatch { .. }));
    }

    #[test]
    fn test_audit_body_emits_entries_in_order() {
        let engine = AuditEngine::new();
        let sink = MemorySink::new();
        let body = json!({
            "success": true,
            "contacts": [
                { "name": "Ada", "tags": [] },
                { "name": "Grace", "tags": ["vip"], "role": "admin" },
            ],
        })
        .to_string();

        let report = engine.audit_body("fixture.json", &body, &sink);

        assert_eq!(report.outcome, OutcomeKind::Matched);
        assert_eq!(report.source, "fixture.json");
        assert!(report.inputs_hash.is_some());

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::ContactCount);
        assert_eq!(entries[1].kind, EntryKind::TaggedContact);
    }

    #[test]
    fn test_audit_body_parse_failure_emits_single_error() {
        let engine = AuditEngine::new();
        let sink = MemorySink::new();

        let report = engine.audit_body("fixture.json", "not json {", &sink);

        assert_eq!(report.outcome, OutcomeKind::ParseFailed);
        assert!(report.error.is_some());
        assert!(report.inputs_hash.is_none());

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::AuditFailed);
        assert_eq!(entries[0].payload["error_kind"], "parse_failed");
    }

    #[test]
    fn test_inputs_hash_is_deterministic() {
        let raw = json!({ "success": true, "contacts": [] });
        let hash1 = AuditEngine::compute_inputs_hash("src", &raw);
        let hash2 = AuditEngine::compute_inputs_hash("src", &raw);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);

        let hash3 = AuditEngine::compute_inputs_hash("other", &raw);
        assert_ne!(hash1, hash3);
    }
}

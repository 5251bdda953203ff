//! Telemetry for the Contact Shape Auditor
//!
//! Routes audit log entries to their destination. The production sink
//! logs through the tracing stack; the memory sink buffers entries so
//! embedders and tests can inspect the exact emission order.

use std::sync::Mutex;

use crate::contracts::{AuditEntry, EntryLevel};

/// Destination for audit log entries
pub trait AuditSink: Send + Sync {
    /// Emit a single entry
    fn emit(&self, entry: &AuditEntry);
}

/// Sink that logs entries as structured tracing events
#[derive(Debug, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn emit(&self, entry: &AuditEntry) {
        match entry.level {
            EntryLevel::Info => tracing::info!(
                kind = entry.kind.as_str(),
                payload = %entry.payload,
                "{}",
                entry.message
            ),
            EntryLevel::Error => tracing::error!(
                kind = entry.kind.as_str(),
                payload = %entry.payload,
                "{}",
                entry.message
            ),
        }
    }
}

/// Sink that buffers entries in memory, preserving emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries emitted so far, in order
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Number of entries emitted so far
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether nothing has been emitted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemorySink {
    fn emit(&self, entry: &AuditEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::EntryKind;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.emit(&AuditEntry::contact_count(2));
        sink.emit(&AuditEntry::not_found());

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::ContactCount);
        assert_eq!(entries[1].kind, EntryKind::NotFound);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_tracing_sink_accepts_all_levels() {
        let sink = TracingSink;
        sink.emit(&AuditEntry::contact_count(0));
        sink.emit(&AuditEntry::failure("fetch_failed", "down"));
    }
}

//! Contact envelope wire model
//!
//! The response shape served by contact collection endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope for a contact collection fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the producer reports the fetch as successful
    #[serde(default)]
    pub success: bool,

    /// Contact records, when the producer included them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
}

impl Envelope {
    /// Whether the envelope carries a scannable collection
    pub fn is_conclusive(&self) -> bool {
        self.success && self.contacts.is_some()
    }
}

/// A single contact record
///
/// Only `tags` and `role` participate in the audit; every other field
/// is preserved verbatim so diagnostics can echo the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Labels attached to the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Declared role of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Remaining fields of the record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contact {
    /// Whether the contact carries at least one tag
    pub fn has_tags(&self) -> bool {
        self.tags.as_ref().is_some_and(|tags| !tags.is_empty())
    }
}

/// A parsed envelope body paired with its raw JSON form
///
/// The raw value is kept because inconclusive audits echo the body
/// exactly as it arrived.
#[derive(Debug, Clone)]
pub struct EnvelopeDocument {
    /// The body exactly as parsed
    pub raw: Value,

    /// The typed view used by the audit
    pub envelope: Envelope,
}

impl EnvelopeDocument {
    /// Build a document from a parsed JSON value
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let envelope: Envelope = serde_json::from_value(raw.clone())?;
        Ok(Self { raw, envelope })
    }
}

//! HTTP client for fetching contact envelopes
//!
//! Issues the single GET the audit needs. No retries and no request
//! timeout; the audit awaits the response for as long as the transport
//! allows.

use serde_json::Value;

use crate::contracts::EnvelopeDocument;
use crate::error::{FetchError, ParseError};

/// Contact collection endpoint client
pub struct ContactsClient {
    client: reqwest::Client,
}

impl Default for ContactsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactsClient {
    /// Create new client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the envelope body served by an endpoint
    pub async fn fetch_body(&self, endpoint: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(FetchError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Parse a fetched body into an envelope document
pub fn parse_envelope(body: &str) -> Result<EnvelopeDocument, ParseError> {
    let raw: Value = serde_json::from_str(body).map_err(|e| ParseError::Json(e.to_string()))?;
    EnvelopeDocument::from_value(raw).map_err(|e| ParseError::Shape(e.to_string()))
}

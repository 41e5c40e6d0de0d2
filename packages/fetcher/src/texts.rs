//! Texts-API client.
//!
//! Fetches a citation's passage and parses the response into a typed
//! [`TextSource`]. The API answers HTTP 200 with an `error` field for
//! unresolvable references, so the body is inspected before parsing.

use mekorot_resolver::TextSource;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::{texts_url, validate_citation, SEFARIA_API_BASE_URL};
use crate::error::{FetcherError, Result};
use crate::http::{create_client, download_json};

/// Client for the Sefaria texts API.
pub struct TextsClient {
    http: Client,
    base_url: String,
}

impl TextsClient {
    /// Create a client against the public API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(SEFARIA_API_BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: create_client()?,
            base_url: base_url.into(),
        })
    }

    /// Fetch and parse the passage for a citation.
    ///
    /// # Errors
    /// - `InvalidCitation` when the citation fails validation
    /// - `Fetch` when the HTTP request fails
    /// - `ApiError` when the API answers with an error body
    pub fn fetch(&self, citation: &str) -> Result<TextSource> {
        validate_citation(citation)?;
        let url = texts_url(&self.base_url, citation);

        tracing::debug!(citation, url = %url, "Fetching passage");
        let body = download_json(&self.http, &url).map_err(|e| {
            if let FetcherError::Http(source) = e {
                FetcherError::Fetch {
                    citation: citation.to_string(),
                    source,
                }
            } else {
                e
            }
        })?;

        if let Some(message) = error_message(&body) {
            return Err(FetcherError::ApiError {
                citation: citation.to_string(),
                message,
            });
        }

        Ok(TextSource::from_response(&body))
    }
}

/// Extract the `error` field from a response body, if present.
fn error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    Some(match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_string() {
        let body = json!({"error": "Could not find title in reference"});
        assert_eq!(
            error_message(&body).as_deref(),
            Some("Could not find title in reference")
        );
    }

    #[test]
    fn test_error_message_absent() {
        assert!(error_message(&json!({"ref": "Genesis 1:1"})).is_none());
    }

    #[test]
    fn test_fetch_rejects_invalid_citation() {
        let client = TextsClient::with_base_url("http://127.0.0.1:1").unwrap();
        let result = client.fetch("");
        assert!(matches!(result, Err(FetcherError::InvalidCitation(_))));
    }
}

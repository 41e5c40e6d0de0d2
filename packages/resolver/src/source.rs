//! Typed view of a texts-API response.
//!
//! The upstream API is third-party and its response shape drifts; every
//! field here is extracted forgivingly, so a partial or malformed response
//! parses into an empty-ish `TextSource` rather than an error.

use serde_json::Value;

use crate::error::Result;
use crate::range::{is_range, resolve_segments, Segment};
use crate::text::TextPayload;

/// A cited source as returned by the texts API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSource {
    /// Canonical reference (`ref`), e.g. `"Exodus 12:2"`.
    pub reference: Option<String>,

    /// Hebrew reference (`heRef`).
    pub heb_reference: Option<String>,

    /// Translation payload (`text`).
    pub text: TextPayload,

    /// Hebrew payload (`he`).
    pub hebrew: TextPayload,

    /// Range start coordinates (`sections`), numeric entries only.
    pub sections: Vec<u64>,

    /// Range end coordinates (`toSections`), numeric entries only.
    pub to_sections: Vec<u64>,

    /// Top-level corpus category (`primary_category` or `type`).
    pub primary_category: Option<String>,
}

impl TextSource {
    /// Parse an API response body.
    ///
    /// Never fails: missing or unexpectedly shaped fields degrade to their
    /// empty defaults. Non-numeric coordinate entries are dropped.
    #[must_use]
    pub fn from_response(body: &Value) -> Self {
        Self {
            reference: string_field(body, "ref"),
            heb_reference: string_field(body, "heRef"),
            text: TextPayload::from_json(body.get("text").unwrap_or(&Value::Null)),
            hebrew: TextPayload::from_json(body.get("he").unwrap_or(&Value::Null)),
            sections: coordinate_field(body, "sections"),
            to_sections: coordinate_field(body, "toSections"),
            primary_category: string_field(body, "primary_category")
                .or_else(|| string_field(body, "type")),
        }
    }

    /// Parse an API response from raw JSON text.
    ///
    /// # Errors
    /// Returns `ResolverError::Json` if the text is not valid JSON. Shape
    /// tolerance still applies once the JSON itself parses.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let body: Value = serde_json::from_str(raw)?;
        Ok(Self::from_response(&body))
    }

    /// Whether the citation denotes a range rather than a single point.
    #[must_use]
    pub fn is_range(&self) -> bool {
        is_range(&self.sections, &self.to_sections)
    }

    /// Resolve the translation payload against the citation coordinates.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        resolve_segments(&self.text, &self.sections, &self.to_sections)
    }

    /// Resolve the Hebrew payload against the citation coordinates.
    #[must_use]
    pub fn hebrew_segments(&self) -> Vec<Segment> {
        resolve_segments(&self.hebrew, &self.sections, &self.to_sections)
    }

    /// Display title: the canonical reference, or `"Source"` when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        match self.reference.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => "Source",
        }
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn coordinate_field(body: &Value, key: &str) -> Vec<u64> {
    match body.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_u64).collect(),
        _ => Vec::new(),
    }
}

//! Tagged-union model of a structured text payload.
//!
//! The texts API returns `text` either as a plain string or as an arbitrarily
//! nested array of strings, where nesting depth mirrors the hierarchical
//! addressing depth (depth 1 = a section's segments, depth 2 =
//! section → segment). Instead of re-sniffing array shapes at every use site,
//! the shape is decided once here when the raw JSON crosses the boundary.

use serde::Serialize;
use serde_json::Value;

/// A structured text payload: a leaf string or an ordered group of payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextPayload {
    /// A single text segment.
    Leaf(String),

    /// An ordered group of nested payloads (a section, or a list of sections).
    Sections(Vec<TextPayload>),
}

impl TextPayload {
    /// Parse a payload from raw JSON.
    ///
    /// Strings become [`TextPayload::Leaf`], arrays become
    /// [`TextPayload::Sections`] recursively. Any other node (null, number,
    /// object) becomes an empty group: it flattens to nothing, but keeps its
    /// position so 1-based addressing of well-formed siblings is unaffected.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Leaf(s.clone()),
            Value::Array(items) => Self::Sections(items.iter().map(Self::from_json).collect()),
            _ => Self::Sections(Vec::new()),
        }
    }

    /// Flatten the payload depth-first into its leaf strings, in document order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf(s) => out.push(s.as_str()),
            Self::Sections(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
        }
    }

    /// The top-level elements, if this payload is a group.
    #[must_use]
    pub fn top_level(&self) -> Option<&[TextPayload]> {
        match self {
            Self::Leaf(_) => None,
            Self::Sections(items) => Some(items),
        }
    }

    /// Whether this payload is a group whose first element is itself a group.
    ///
    /// A nested payload addresses sections of segments; a flat one addresses
    /// segments directly.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            Self::Sections(items) if matches!(items.first(), Some(Self::Sections(_)))
        )
    }

    /// Whether the payload flattens to no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(s) => s.is_empty(),
            Self::Sections(items) => items.iter().all(Self::is_empty),
        }
    }
}

impl Default for TextPayload {
    fn default() -> Self {
        Self::Sections(Vec::new())
    }
}

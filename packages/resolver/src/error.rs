//! Error types for the resolver.
//!
//! Range resolution itself never fails: malformed payload shapes degrade to
//! best-effort flattening or an empty result. Errors only arise at the
//! explicit entry points (citation validation, JSON deserialization).

use thiserror::Error;

/// Main error type for the resolver library.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Input could not be interpreted as a citation.
    #[error("Invalid citation: '{0}'. Expected a textual reference (e.g., 'Exodus 12:2') or a sefaria.org URL")]
    InvalidCitation(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

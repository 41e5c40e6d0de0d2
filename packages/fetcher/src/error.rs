//! Error types for the fetcher.

use thiserror::Error;

/// Main error type for the fetcher library.
#[derive(Debug, Error)]
pub enum FetcherError {
    /// Input could not be interpreted as a citation.
    #[error("Invalid citation: '{0}'. Expected a textual reference (e.g., 'Exodus 12:2') or a sefaria.org URL")]
    InvalidCitation(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch a citation from the texts API.
    #[error("Failed to fetch '{citation}': {source}")]
    Fetch {
        citation: String,
        #[source]
        source: reqwest::Error,
    },

    /// The texts API answered with an error body.
    #[error("Texts API rejected '{citation}': {message}")]
    ApiError { citation: String, message: String },

    /// All retry attempts were spent on transient failures.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resolver error.
    #[error(transparent)]
    Resolver(#[from] mekorot_resolver::ResolverError),
}

/// Result type alias for fetcher operations.
pub type Result<T> = std::result::Result<T, FetcherError>;

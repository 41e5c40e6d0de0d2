//! Mekorot Fetcher - Fetch and display cited passages.
//!
//! This crate wraps [`mekorot_resolver`] with the I/O half of the system:
//! it fetches a cited passage from the Sefaria texts API, resolves the
//! citation's range against the returned payload, and renders the labeled
//! segments for a terminal.
//!
//! # Architecture
//!
//! - [`config`]: API endpoints, timeouts, and citation validation
//! - [`error`]: Error types and Result alias
//! - [`http`]: Blocking HTTP client with retry
//! - [`texts`]: Texts-API client
//! - [`render`]: Terminal rendering of resolved passages
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod texts;

// Re-export commonly used items
pub use config::validate_citation;
pub use error::{FetcherError, Result};
pub use render::{render_source, Language, RenderOptions};
pub use texts::TextsClient;

//! Mekorot Citation Range Resolver
//!
//! A pure library for resolving hierarchical citations (section/segment
//! coordinates, analogous to chapter/verse) against the structured text
//! payloads returned by the Sefaria texts API.
//!
//! The payload shape is decided once at the system boundary: raw JSON is
//! parsed into a [`TextPayload`] tagged union, after which all slicing logic
//! works on typed data instead of re-inspecting array shapes.
//!
//! # Example
//!
//! ```
//! use mekorot_resolver::{resolve_segments, TextPayload};
//! use serde_json::json;
//!
//! let text = TextPayload::from_json(&json!(["a", "b", "c", "d"]));
//! let segments = resolve_segments(&text, &[2], &[3]);
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].label, "2");
//! assert_eq!(segments[0].content, "b");
//! ```
//!
//! # Architecture
//!
//! - [`text`]: The `TextPayload` tagged union and boundary parsing
//! - [`source`]: Typed view of a texts-API response (`TextSource`)
//! - [`range`]: Range detection and segment resolution
//! - [`citation`]: Citation extraction from free text and sefaria.org URLs
//! - [`error`]: Error types and Result alias

pub mod citation;
pub mod error;
pub mod range;
pub mod source;
pub mod text;

// Re-export commonly used items
pub use citation::{extract_citation, parse_citation};
pub use error::{ResolverError, Result};
pub use range::{is_range, label_width, resolve_segments, Segment};
pub use source::TextSource;
pub use text::TextPayload;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

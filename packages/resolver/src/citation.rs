//! Citation extraction from free-form input.
//!
//! Users paste either a textual reference (`Exodus 12:2`, `Shabbat 34b:4`)
//! or a sefaria.org URL; both are reduced to the citation path the texts API
//! expects.
//!
//! # Examples
//!
//! ```
//! use mekorot_resolver::citation::extract_citation;
//!
//! assert_eq!(extract_citation("Exodus 12:2").as_deref(), Some("Exodus 12:2"));
//! assert_eq!(
//!     extract_citation("https://www.sefaria.org/Shabbat.34b.4").as_deref(),
//!     Some("Shabbat.34b.4")
//! );
//! assert!(extract_citation("").is_none());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{ResolverError, Result};

/// Maximum length of a pasted citation; longer input is treated as prose.
pub const MAX_CITATION_LEN: usize = 120;

/// Sefaria URL embedded somewhere in pasted text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMBEDDED_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://(?:www\.)?sefaria\.org/(\S+)").expect("valid regex"));

/// Extract a citation from pasted input.
///
/// Recognizes, in order:
/// 1. A sefaria.org URL: the percent-decoded path, query stripped.
/// 2. A sefaria.org URL embedded in surrounding text.
/// 3. The input itself, unless it is empty, spans multiple lines, or exceeds
///    [`MAX_CITATION_LEN`] characters.
#[must_use]
pub fn extract_citation(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed) {
        if matches!(url.host_str(), Some("www.sefaria.org" | "sefaria.org")) {
            return clean_path(url.path());
        }
    }

    if let Some(captures) = EMBEDDED_URL_PATTERN.captures(trimmed) {
        let raw = captures[1].split('?').next().unwrap_or("");
        return clean_path(raw);
    }

    if trimmed.contains('\n') || trimmed.len() > MAX_CITATION_LEN {
        return None;
    }

    Some(trimmed.to_string())
}

/// Extract a citation, failing instead of returning `None`.
///
/// # Errors
/// Returns `ResolverError::InvalidCitation` when no citation can be
/// extracted from the input.
pub fn parse_citation(input: &str) -> Result<String> {
    extract_citation(input).ok_or_else(|| ResolverError::InvalidCitation(input.to_string()))
}

/// Strip leading slashes and percent-decode a URL path into a citation.
fn clean_path(path: &str) -> Option<String> {
    let stripped = path.trim_start_matches('/');
    if stripped.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(stripped)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| stripped.to_string());
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

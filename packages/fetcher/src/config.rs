//! Configuration constants and validation functions for the fetcher.

use mekorot_resolver::citation::MAX_CITATION_LEN;

use crate::error::{FetcherError, Result};

/// Base URL of the Sefaria texts API.
pub const SEFARIA_API_BASE_URL: &str = "https://www.sefaria.org/api/texts";

/// Base URL of the public Sefaria site, used for reference links.
pub const SEFARIA_WEB_BASE_URL: &str = "https://www.sefaria.org";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Wrap width for rendered passage text.
pub const TEXT_WRAP_WIDTH: usize = 80;

/// Validate an extracted citation before building a request from it.
///
/// # Errors
/// Returns `FetcherError::InvalidCitation` if the citation is empty, spans
/// multiple lines, or exceeds the maximum length.
pub fn validate_citation(citation: &str) -> Result<()> {
    let trimmed = citation.trim();
    if trimmed.is_empty() || trimmed.contains('\n') || trimmed.len() > MAX_CITATION_LEN {
        return Err(FetcherError::InvalidCitation(citation.to_string()));
    }
    Ok(())
}

/// Build the texts-API URL for a citation.
///
/// # Arguments
/// * `base_url` - API base (normally [`SEFARIA_API_BASE_URL`]; tests inject a mock)
/// * `citation` - The citation (should be validated with `validate_citation` first)
pub fn texts_url(base_url: &str, citation: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(citation)
    )
}

/// Build the public site URL for a citation.
pub fn web_url(citation: &str) -> String {
    format!("{SEFARIA_WEB_BASE_URL}/{}", urlencoding::encode(citation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_citation_valid() {
        assert!(validate_citation("Exodus 12:2").is_ok());
        assert!(validate_citation("Shabbat 34b:4").is_ok());
        assert!(validate_citation("Mishnah Peah 4:7").is_ok());
    }

    #[test]
    fn test_validate_citation_invalid() {
        assert!(validate_citation("").is_err());
        assert!(validate_citation("   ").is_err());
        assert!(validate_citation("Genesis 1\nExodus 2").is_err());
        assert!(validate_citation(&"x".repeat(MAX_CITATION_LEN + 1)).is_err());
    }

    #[test]
    fn test_texts_url() {
        assert_eq!(
            texts_url(SEFARIA_API_BASE_URL, "Genesis.1.1-3"),
            "https://www.sefaria.org/api/texts/Genesis.1.1-3"
        );
    }

    #[test]
    fn test_texts_url_encodes_citation() {
        assert_eq!(
            texts_url(SEFARIA_API_BASE_URL, "Exodus 12:2"),
            "https://www.sefaria.org/api/texts/Exodus%2012%3A2"
        );
    }

    #[test]
    fn test_texts_url_trailing_slash_base() {
        assert_eq!(
            texts_url("http://127.0.0.1:9000/", "Genesis.1"),
            "http://127.0.0.1:9000/Genesis.1"
        );
    }

    #[test]
    fn test_web_url() {
        assert_eq!(
            web_url("Shabbat 34b:4"),
            "https://www.sefaria.org/Shabbat%2034b%3A4"
        );
    }
}

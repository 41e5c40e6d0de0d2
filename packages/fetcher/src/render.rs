//! Terminal rendering of resolved passages.
//!
//! Passage text comes from the API with light HTML markup (italics, line
//! breaks, entities); it is reduced to plain text before layout. Range
//! citations render with a right-aligned label gutter sized by the longest
//! label, non-range citations as plain wrapped paragraphs.

use std::sync::LazyLock;

use console::style;
use mekorot_resolver::{label_width, TextSource};
use regex::Regex;
use textwrap::{fill, Options};

use crate::config::{web_url, TEXT_WRAP_WIDTH};

/// Placeholder shown when a passage resolves to no segments.
const EMPTY_PLACEHOLDER: &str = "…";

/// HTML line break, replaced with a space before tag stripping.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_BREAK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

/// Any remaining HTML tag.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Runs of whitespace left behind by stripped markup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Which payload of a source to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// The translation payload (`text`).
    #[default]
    English,
    /// The Hebrew payload (`he`).
    Hebrew,
}

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Total line width (gutter included).
    pub width: usize,
    /// Payload to render.
    pub language: Language,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: TEXT_WRAP_WIDTH,
            language: Language::English,
        }
    }
}

/// Reduce passage markup to plain text.
///
/// Strips tags, decodes the entities the API is known to emit, and
/// collapses the whitespace left behind.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    let broken = LINE_BREAK_PATTERN.replace_all(text, " ");
    let stripped = TAG_PATTERN.replace_all(&broken, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&thinsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    WHITESPACE_PATTERN
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Render a fetched source for the terminal.
#[must_use]
pub fn render_source(source: &TextSource, opts: &RenderOptions) -> String {
    let segments = match opts.language {
        Language::English => source.segments(),
        Language::Hebrew => source.hebrew_segments(),
    };

    let title = source.title();
    let mut out = format!(
        "{}  {}\n\n",
        style(title).bold(),
        style(web_url(title)).dim()
    );

    if segments.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    if source.is_range() {
        let gutter = label_width(&segments) + 1;
        let body_width = opts.width.saturating_sub(gutter + 1).max(20);
        let continuation = " ".repeat(gutter + 1);

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let content = strip_markup(&segment.content);
            let wrapped = fill(&content, Options::new(body_width));
            for (j, line) in wrapped.lines().enumerate() {
                if j == 0 {
                    let padded = format!("{:>width$}", segment.label, width = gutter);
                    out.push_str(&format!("{} {line}\n", style(padded).dim()));
                } else {
                    out.push_str(&format!("{continuation}{line}\n"));
                }
            }
        }
    } else {
        let paragraphs: Vec<String> = segments
            .iter()
            .map(|s| fill(&strip_markup(&s.content), Options::new(opts.width)))
            .filter(|p| !p.is_empty())
            .collect();
        out.push_str(&paragraphs.join("\n\n"));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_strip_markup_tags() {
        assert_eq!(
            strip_markup("And <i>God</i> said, <b>Let there be light</b>"),
            "And God said, Let there be light"
        );
    }

    #[test]
    fn test_strip_markup_breaks_and_entities() {
        assert_eq!(
            strip_markup("first<br/>second&nbsp;&amp;&nbsp;third"),
            "first second & third"
        );
        assert_eq!(strip_markup("a &lt;b&gt; &#39;c&#39;"), "a <b> 'c'");
    }

    #[test]
    fn test_strip_markup_plain_text_unchanged() {
        assert_eq!(strip_markup("plain text"), "plain text");
    }

    #[test]
    fn test_render_placeholder_for_empty_source() {
        let source = TextSource::from_response(&json!({"ref": "Genesis 1:1"}));
        let rendered = render_source(&source, &RenderOptions::default());
        assert!(rendered.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_render_range_has_labels() {
        let source = TextSource::from_response(&json!({
            "ref": "Genesis 1:1-3",
            "text": ["In the beginning", "Now the earth", "And God said"],
            "sections": [1, 1],
            "toSections": [1, 3],
        }));
        let rendered = render_source(&source, &RenderOptions::default());
        assert!(rendered.contains("Genesis 1:1-3"));
        assert!(rendered.contains(" 1 In the beginning"));
        assert!(rendered.contains(" 3 And God said"));
    }

    #[test]
    fn test_render_non_range_paragraphs() {
        let source = TextSource::from_response(&json!({
            "ref": "Genesis 1",
            "text": ["first verse", "second verse"],
            "sections": [1],
            "toSections": [1],
        }));
        let rendered = render_source(&source, &RenderOptions::default());
        assert!(rendered.contains("first verse\n\nsecond verse"));
    }

    #[test]
    fn test_render_hebrew_payload() {
        let source = TextSource::from_response(&json!({
            "ref": "Genesis 1:1",
            "text": ["In the beginning"],
            "he": ["בראשית ברא"],
        }));
        let opts = RenderOptions {
            language: Language::Hebrew,
            ..RenderOptions::default()
        };
        let rendered = render_source(&source, &opts);
        assert!(rendered.contains("בראשית ברא"));
        assert!(!rendered.contains("In the beginning"));
    }

    #[test]
    fn test_render_wraps_long_content_with_hanging_indent() {
        let long = "word ".repeat(40);
        let source = TextSource::from_response(&json!({
            "ref": "Test 1:1-2",
            "text": [long, "short"],
            "sections": [1, 1],
            "toSections": [1, 2],
        }));
        let rendered = render_source(
            &source,
            &RenderOptions {
                width: 40,
                language: Language::English,
            },
        );
        // Continuation lines indent past the label gutter.
        assert!(rendered.contains("\n    word"));
    }
}

//! Range detection and segment resolution.
//!
//! A citation addresses a location in a text with 1-based hierarchical
//! coordinates, most significant first: `[3]` is section 3, `[3, 5]` is
//! section 3, segment 5. `sections` is the start of a range and `toSections`
//! the end; when they denote the same point the citation is not a range and
//! the whole payload is returned as-is.
//!
//! Labeling is uniform across depths: segments keep plain segment numbers
//! while a range stays inside one section, and switch to `"section:segment"`
//! once it spans sections, with per-section numbering restarting at 1 after
//! the first section.

use serde::Serialize;

use crate::text::TextPayload;

/// One resolved text segment with its display label.
///
/// The label is empty for non-range citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Leading reference label (e.g., `"5"` or `"3:5"`), empty when unlabeled.
    pub label: String,

    /// Segment text, as returned by the API (may contain markup).
    pub content: String,
}

impl Segment {
    fn unlabeled(content: &str) -> Self {
        Self {
            label: String::new(),
            content: content.to_string(),
        }
    }

    fn labeled(label: String, content: &str) -> Self {
        Self {
            label,
            content: content.to_string(),
        }
    }
}

/// Whether a pair of coordinate lists denotes a range rather than a point.
///
/// True iff both lists are non-empty and either their lengths differ or any
/// corresponding pair of entries differs. A length-matching, value-matching
/// pair is a single point, not a range.
#[must_use]
pub fn is_range(sections: &[u64], to_sections: &[u64]) -> bool {
    if sections.is_empty() || to_sections.is_empty() {
        return false;
    }
    if sections.len() != to_sections.len() {
        return true;
    }
    sections.iter().zip(to_sections).any(|(a, b)| a != b)
}

/// Resolve a citation against its text payload.
///
/// Non-range citations (and payloads too malformed to address) resolve to
/// the full depth-first flattening with empty labels. Range citations
/// resolve to the ordered, labeled segments covering exactly the addressed
/// range. Output order always matches document order; an empty or
/// unrecognizable payload resolves to an empty vec and the caller renders
/// a placeholder.
#[must_use]
pub fn resolve_segments(text: &TextPayload, sections: &[u64], to_sections: &[u64]) -> Vec<Segment> {
    let start = sections;
    let end = if to_sections.is_empty() {
        sections
    } else {
        to_sections
    };

    tracing::trace!(?sections, ?to_sections, "Resolving citation range");

    let Some(top_level) = text.top_level() else {
        // Plain string payload: nothing to slice.
        return flatten_unlabeled(text);
    };

    if start.is_empty() || !is_range(sections, to_sections) {
        return flatten_unlabeled(text);
    }

    if start.len() == 1 {
        resolve_depth_one(text, top_level, start[0], end[0])
    } else {
        resolve_segment_level(text, top_level, start, end)
    }
}

/// Maximum label length across segments, minimum 2.
///
/// Rendering hint for sizing a label gutter, not a data-model property.
#[must_use]
pub fn label_width(segments: &[Segment]) -> usize {
    segments
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0)
        .max(2)
}

fn flatten_unlabeled(text: &TextPayload) -> Vec<Segment> {
    text.flatten().into_iter().map(Segment::unlabeled).collect()
}

/// Section-level addressing (e.g., a chapter range).
///
/// Many depth-1 texts come back as a flat array of segment strings even
/// though the request addressed whole sections; the coordinates are then
/// treated as 1-based segment indices into that flat array.
fn resolve_depth_one(
    text: &TextPayload,
    top_level: &[TextPayload],
    start: u64,
    end: u64,
) -> Vec<Segment> {
    if !text.is_nested() {
        let leaves = text.flatten();
        return slice_inclusive(&leaves, start, end)
            .iter()
            .enumerate()
            .map(|(i, t)| Segment::labeled((start + i as u64).to_string(), t))
            .collect();
    }

    // Array of sections: the payload starts at the requested start section.
    let spans = start != end;
    let count = section_count(start, end);
    let mut out = Vec::new();
    for (section_idx, section) in top_level.iter().take(count).enumerate() {
        let section_number = start + section_idx as u64;
        for (i, t) in section.flatten().iter().enumerate() {
            let segment_number = 1 + i as u64;
            out.push(Segment::labeled(
                range_label(spans, section_number, segment_number),
                t,
            ));
        }
    }
    out
}

/// Segment-level addressing (depth >= 2, e.g., chapter:verse).
fn resolve_segment_level(
    text: &TextPayload,
    top_level: &[TextPayload],
    start: &[u64],
    end: &[u64],
) -> Vec<Segment> {
    let start_section = start[0];
    let start_segment = start[start.len() - 1];
    let end_section = *end.first().unwrap_or(&start_section);
    let end_segment = *end.last().unwrap_or(&start_segment);
    let spans = start_section != end_section;

    // Single containing section returned as a flat array of segment strings.
    if !text.is_nested() {
        let leaves = text.flatten();
        let selected = if spans {
            // The payload carries no end boundary for a spanning range, so
            // take the remaining tail of the start section.
            slice_from(&leaves, start_segment)
        } else {
            slice_inclusive(&leaves, start_segment, end_segment)
        };
        return selected
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Segment::labeled(
                    range_label(spans, start_section, start_segment + i as u64),
                    t,
                )
            })
            .collect();
    }

    // Array of sections: first section starts at the start segment, the last
    // is truncated at the end segment, interior sections are kept whole.
    let count = section_count(start_section, end_section);
    let start_idx = start_segment.saturating_sub(1) as usize;

    let mut out = Vec::new();
    for (section_idx, section) in top_level.iter().take(count).enumerate() {
        let section_number = start_section + section_idx as u64;
        let mut leaves = section.flatten();
        if section_idx == 0 {
            leaves.drain(..start_idx.min(leaves.len()));
        }
        if section_idx == count - 1 {
            leaves.truncate(end_segment as usize);
        }

        for (i, t) in leaves.iter().enumerate() {
            let segment_number = if section_idx == 0 {
                start_segment + i as u64
            } else {
                1 + i as u64
            };
            out.push(Segment::labeled(
                range_label(spans, section_number, segment_number),
                t,
            ));
        }
    }
    out
}

fn range_label(spans_sections: bool, section: u64, segment: u64) -> String {
    if spans_sections {
        format!("{section}:{segment}")
    } else {
        segment.to_string()
    }
}

/// Number of top-level sections covered by an inclusive section range.
fn section_count(start: u64, end: u64) -> usize {
    if end > start {
        (end - start + 1) as usize
    } else {
        1
    }
}

/// Inclusive 1-based slice `[start, end]`, clamped to the available leaves.
fn slice_from<'a>(leaves: &[&'a str], start: u64) -> Vec<&'a str> {
    let start_idx = (start.saturating_sub(1) as usize).min(leaves.len());
    leaves[start_idx..].to_vec()
}

fn slice_inclusive<'a>(leaves: &[&'a str], start: u64, end: u64) -> Vec<&'a str> {
    let start_idx = (start.saturating_sub(1) as usize).min(leaves.len());
    let end_exclusive = (end as usize).max(start_idx).min(leaves.len());
    leaves[start_idx..end_exclusive].to_vec()
}

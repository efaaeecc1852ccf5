//! Reconciliation of suggestion spans onto their source text.
//!
//! [`reconcile`] turns a text plus a batch of suggestions into an ordered
//! partition of plain and flagged segments, ready for rendering with
//! accept/reject affordances. Suggestion offsets come from an AI producer
//! and are treated as hostile: unsorted batches, overlapping spans, and
//! out-of-range or inverted offsets all degrade to dropped suggestions,
//! never to a panic or an error.

use crate::proofread::segment::Segment;
use crate::proofread::suggestion::Suggestion;

/// Byte offset of each char boundary, with a final entry at `text.len()`.
///
/// Entry `i` is the byte position of char `i`, so the chars `[a, b)` of
/// `text` occupy the bytes `boundaries[a]..boundaries[b]`.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Partition `text` into plain and flagged segments.
///
/// Suggestions are stably sorted by start offset, then swept left to
/// right with a cursor:
///
/// - a suggestion ending past the text is clamped to the text's length;
/// - a suggestion whose clamped span is empty or inverted is dropped;
/// - a suggestion starting before the cursor overlaps an already-emitted
///   flagged span and is dropped (first applicable wins);
/// - everything between flagged spans is emitted as plain segments.
///
/// Concatenating the returned segments' texts always reproduces `text`
/// exactly. Empty text yields an empty vector. A flagged segment whose
/// slice differs from the suggestion's `original_text` carries a
/// mismatch marker; the span is still emitted because the offsets, not
/// the claimed text, define it.
#[must_use]
pub fn reconcile<'a>(text: &'a str, suggestions: &'a [Suggestion]) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let boundaries = char_boundaries(text);
    let len_chars = boundaries.len() - 1;

    let mut ordered: Vec<&Suggestion> = suggestions.iter().collect();
    ordered.sort_by_key(|s| s.start_index);

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for suggestion in ordered {
        let end = suggestion.end_index.min(len_chars);
        if end <= suggestion.start_index {
            tracing::warn!(
                id = %suggestion.id,
                start = suggestion.start_index,
                end = suggestion.end_index,
                "dropping suggestion with empty or out-of-range span"
            );
            continue;
        }
        if suggestion.start_index < cursor {
            tracing::warn!(
                id = %suggestion.id,
                start = suggestion.start_index,
                cursor,
                "dropping suggestion overlapping an earlier span"
            );
            continue;
        }
        if suggestion.start_index > cursor {
            segments.push(Segment::plain(
                &text[boundaries[cursor]..boundaries[suggestion.start_index]],
                cursor..suggestion.start_index,
            ));
        }
        let slice = &text[boundaries[suggestion.start_index]..boundaries[end]];
        let mismatch = slice != suggestion.original_text;
        if mismatch {
            tracing::warn!(
                id = %suggestion.id,
                claimed = %suggestion.original_text,
                actual = %slice,
                "suggestion span does not contain its claimed text"
            );
        }
        segments.push(Segment::flagged(
            slice,
            suggestion.start_index..end,
            &suggestion.id,
            mismatch,
        ));
        cursor = end;
    }

    if cursor < len_chars {
        segments.push(Segment::plain(
            &text[boundaries[cursor]..],
            cursor..len_chars,
        ));
    }
    segments
}

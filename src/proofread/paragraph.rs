//! Blank-line paragraph splitting with offset bookkeeping.
//!
//! Long documents (cover letters) render paragraph by paragraph, but
//! proofreading suggestions arrive with offsets into the whole document.
//! [`split_paragraphs`] records where each paragraph starts so that
//! [`paragraph_suggestions`] can translate a document-level batch into
//! paragraph-local coordinates for per-paragraph reconciliation.

use serde::Serialize;

use crate::proofread::suggestion::Suggestion;

/// A paragraph of a larger document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph<'a> {
    /// The raw (untrimmed) slice of the source document.
    pub text: &'a str,
    /// Char offset of the slice's first char in the source document.
    pub start: usize,
}

impl Paragraph<'_> {
    /// Length of the paragraph in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Char offset one past the paragraph's last char in the source document.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }
}

/// Split a document on blank-line boundaries, keeping start offsets.
///
/// A paragraph delimiter is a newline, any amount of whitespace, and a
/// closing newline, consumed greedily through the last newline of each
/// whitespace run. Horizontal whitespace after that closing newline
/// belongs to the next paragraph, and a lone newline inside a paragraph
/// is just a soft break. Slices are kept raw; paragraphs that trim to
/// empty are discarded. All offsets are char offsets.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut paragraphs = Vec::new();
    let mut para_start_char = 0usize;
    let mut para_start_byte = 0usize;
    let mut i = 0usize;
    while i < chars.len() {
        if chars[i].1 != '\n' {
            i += 1;
            continue;
        }
        // Maximal whitespace run following this newline
        let mut j = i + 1;
        while j < chars.len() && chars[j].1.is_whitespace() {
            j += 1;
        }
        // The last newline in the run closes the delimiter; without one
        // this is a soft break, not a paragraph boundary
        let Some(closing) = (i + 1..j).rev().find(|&k| chars[k].1 == '\n') else {
            i = j;
            continue;
        };
        let slice = &text[para_start_byte..chars[i].0];
        if !slice.trim().is_empty() {
            paragraphs.push(Paragraph {
                text: slice,
                start: para_start_char,
            });
        }
        para_start_char = closing + 1;
        para_start_byte = chars
            .get(closing + 1)
            .map_or(text.len(), |&(byte, _)| byte);
        i = closing + 1;
    }

    let tail = &text[para_start_byte..];
    if !tail.trim().is_empty() {
        paragraphs.push(Paragraph {
            text: tail,
            start: para_start_char,
        });
    }
    paragraphs
}

/// Translate a document-level suggestion batch into paragraph coordinates.
///
/// A suggestion belongs to a paragraph only when its whole span lies
/// within the paragraph; spans that straddle a boundary are attributed to
/// no paragraph. Surviving suggestions have both offsets rebased by the
/// paragraph start (saturating, so a degenerate inverted span cannot
/// underflow).
#[must_use]
pub fn paragraph_suggestions(
    paragraph: &Paragraph<'_>,
    suggestions: &[Suggestion],
) -> Vec<Suggestion> {
    let end = paragraph.end();
    suggestions
        .iter()
        .filter(|s| s.start_index >= paragraph.start && s.end_index <= end)
        .map(|s| Suggestion {
            start_index: s.start_index - paragraph.start,
            end_index: s.end_index.saturating_sub(paragraph.start),
            ..s.clone()
        })
        .collect()
}

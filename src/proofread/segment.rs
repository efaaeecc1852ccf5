//! Display segments produced by suggestion reconciliation.

use std::ops::Range;

use serde::Serialize;

/// How a segment should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SegmentKind<'a> {
    /// An unremarkable run of text.
    Plain,
    /// A run covered by a proofreading suggestion.
    Flagged {
        /// Id of the suggestion claiming this span.
        suggestion_id: &'a str,
        /// True when the literal slice differs from the text the
        /// producer claimed to be replacing.
        mismatch: bool,
    },
}

/// One contiguous run of reconciled text.
///
/// Segments partition their source text: in reconciler output they are
/// ordered left to right, never overlap, and concatenating their `text`
/// fields reproduces the source exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// The slice of the source text this segment covers.
    pub text: &'a str,
    /// Half-open char range in the source text.
    pub range: Range<usize>,
    /// Rendering classification.
    #[serde(flatten)]
    pub kind: SegmentKind<'a>,
}

impl<'a> Segment<'a> {
    /// Create a plain segment.
    #[must_use]
    pub fn plain(text: &'a str, range: Range<usize>) -> Self {
        Self {
            text,
            range,
            kind: SegmentKind::Plain,
        }
    }

    /// Create a flagged segment for a suggestion.
    #[must_use]
    pub fn flagged(
        text: &'a str,
        range: Range<usize>,
        suggestion_id: &'a str,
        mismatch: bool,
    ) -> Self {
        Self {
            text,
            range,
            kind: SegmentKind::Flagged {
                suggestion_id,
                mismatch,
            },
        }
    }

    /// Check if this segment is flagged.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        matches!(self.kind, SegmentKind::Flagged { .. })
    }

    /// The suggestion id if this segment is flagged.
    #[must_use]
    pub fn suggestion_id(&self) -> Option<&'a str> {
        match self.kind {
            SegmentKind::Flagged { suggestion_id, .. } => Some(suggestion_id),
            SegmentKind::Plain => None,
        }
    }

    /// Whether a flagged segment's slice disagreed with the producer's claim.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self.kind, SegmentKind::Flagged { mismatch: true, .. })
    }

    /// Check if this segment overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }

    /// Length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }
}

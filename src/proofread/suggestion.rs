//! Suggestion types and ingestion of the AI proofreading payload.
//!
//! The proofreading service returns a JSON array of suggestion objects.
//! That payload crosses an LLM boundary, so nothing about it is trusted:
//! offsets arrive as floating-point numbers that may be fractional,
//! negative, or (through non-JSON paths) non-finite, and the rationale
//! field may be missing. [`parse_suggestions`] and [`sanitize_suggestions`]
//! turn the raw payload into validated [`Suggestion`] values with stable
//! ids, dropping entries whose offsets cannot describe a text span.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated proofreading suggestion.
///
/// `start_index`/`end_index` are half-open character offsets into the
/// target text. They describe where the producer believes
/// `original_text` sits; reconciliation re-checks that claim rather
/// than assuming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Stable id, unique within one batch.
    pub id: String,
    /// The substring the producer claims occupies the span.
    pub original_text: String,
    /// Proposed replacement text.
    pub suggestion: String,
    /// Human-readable rationale.
    pub explanation: String,
    /// Start of the claimed span (char offset, inclusive).
    pub start_index: usize,
    /// End of the claimed span (char offset, exclusive).
    pub end_index: usize,
}

impl Suggestion {
    /// The claimed span as a half-open char range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

/// Wire form of one suggestion as produced by the AI service.
///
/// No id yet; ids are assigned during sanitization. Offsets are raw JSON
/// numbers and `explanation` defaults to empty when the producer omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSuggestion {
    pub original_text: String,
    pub suggestion: String,
    #[serde(default)]
    pub explanation: String,
    pub start_index: f64,
    pub end_index: f64,
}

impl RawSuggestion {
    /// Whether both offsets can describe a position in some text.
    ///
    /// Fractional values are allowed here (they truncate on conversion);
    /// negative and non-finite values cannot be made sense of and mark
    /// the entry invalid.
    #[must_use]
    pub fn has_valid_offsets(&self) -> bool {
        self.start_index.is_finite()
            && self.end_index.is_finite()
            && self.start_index >= 0.0
            && self.end_index >= 0.0
    }
}

/// Validate raw payload entries and assign ids.
///
/// Entries with negative or non-finite offsets are dropped with a
/// warning. Survivors get the id `"{start}-{ordinal}"`, where the ordinal
/// is the entry's position in the raw payload, so ids stay stable even
/// when earlier entries are dropped. Fractional offsets truncate.
#[must_use]
pub fn sanitize_suggestions(raw: Vec<RawSuggestion>) -> Vec<Suggestion> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(ordinal, entry)| {
            if !entry.has_valid_offsets() {
                tracing::warn!(
                    ordinal,
                    start = entry.start_index,
                    end = entry.end_index,
                    "dropping suggestion with invalid offsets"
                );
                return None;
            }
            let start = entry.start_index as usize;
            let end = entry.end_index as usize;
            Some(Suggestion {
                id: format!("{start}-{ordinal}"),
                original_text: entry.original_text,
                suggestion: entry.suggestion,
                explanation: entry.explanation,
                start_index: start,
                end_index: end,
            })
        })
        .collect()
}

/// Parse a proofreading payload into validated suggestions.
///
/// The payload is trimmed first (producers pad their output with
/// whitespace) and must then be a JSON array of suggestion objects;
/// anything else is an error. Individual entries with unusable offsets
/// are dropped rather than failing the batch.
pub fn parse_suggestions(json: &str) -> Result<Vec<Suggestion>> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("empty suggestion payload".to_string()));
    }
    let raw: Vec<RawSuggestion> = serde_json::from_str(trimmed)?;
    Ok(sanitize_suggestions(raw))
}

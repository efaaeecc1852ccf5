//! Fuzz target for suggestion reconciliation.
//!
//! Feeds arbitrary text and an arbitrary raw payload through sanitization
//! and reconciliation, checking that the output is always a faithful
//! partition of the input text.

#![no_main]

use arbitrary::Arbitrary;
use careerdraft::{RawSuggestion, reconcile, sanitize_suggestions};
use libfuzzer_sys::fuzz_target;

/// Structured input: a document plus one payload entry per span.
#[derive(Arbitrary, Debug)]
struct ReconcileInput {
    text: String,
    spans: Vec<RawSpan>,
}

#[derive(Arbitrary, Debug)]
struct RawSpan {
    original_text: String,
    suggestion: String,
    start_index: f64,
    end_index: f64,
}

fuzz_target!(|input: ReconcileInput| {
    let raw: Vec<RawSuggestion> = input
        .spans
        .into_iter()
        .take(64) // Limit batch size
        .map(|span| RawSuggestion {
            original_text: span.original_text,
            suggestion: span.suggestion,
            explanation: String::new(),
            start_index: span.start_index,
            end_index: span.end_index,
        })
        .collect();
    let suggestions = sanitize_suggestions(raw);

    let segments = reconcile(&input.text, &suggestions);

    // Joining segment texts must reproduce the document exactly
    let mut joined = String::with_capacity(input.text.len());
    for segment in &segments {
        joined.push_str(segment.text);
    }
    assert_eq!(joined, input.text);

    // Segments are contiguous, nonempty char ranges covering the document
    let mut cursor = 0;
    for segment in &segments {
        assert_eq!(segment.range.start, cursor);
        assert!(segment.range.end > segment.range.start);
        cursor = segment.range.end;
    }
    assert_eq!(cursor, input.text.chars().count());
});

//! Fuzz target for paragraph splitting.
//!
//! Checks that arbitrary text splits into faithful, well-ordered slices and
//! that the per-paragraph rendering pipeline stays total for wild offsets.

#![no_main]

use arbitrary::Arbitrary;
use careerdraft::{Suggestion, paragraph_suggestions, reconcile, split_paragraphs};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct SplitInput {
    text: String,
    spans: Vec<(u16, u16)>,
}

fuzz_target!(|input: SplitInput| {
    let paragraphs = split_paragraphs(&input.text);

    // Char offset -> byte offset table for slice checks
    let boundaries: Vec<usize> = input
        .text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(input.text.len()))
        .collect();

    let mut previous_end = 0;
    let mut first = true;
    for paragraph in &paragraphs {
        // Kept paragraphs carry visible content and are raw slices of the input
        assert!(!paragraph.text.trim().is_empty());
        let start_byte = boundaries[paragraph.start];
        let end_byte = boundaries[paragraph.end()];
        assert_eq!(&input.text[start_byte..end_byte], paragraph.text);
        // At least a two-char delimiter separates consecutive paragraphs
        if !first {
            assert!(paragraph.start >= previous_end + 2);
        }
        previous_end = paragraph.end();
        first = false;
    }

    let suggestions: Vec<Suggestion> = input
        .spans
        .iter()
        .take(32) // Limit batch size
        .enumerate()
        .map(|(ordinal, &(start, end))| Suggestion {
            id: format!("{start}-{ordinal}"),
            original_text: String::new(),
            suggestion: String::new(),
            explanation: String::new(),
            start_index: usize::from(start),
            end_index: usize::from(end),
        })
        .collect();

    // Attribution, rebase, and reconciliation never panic, whatever the spans
    for paragraph in &paragraphs {
        let local = paragraph_suggestions(paragraph, &suggestions);
        let segments = reconcile(paragraph.text, &local);
        let joined: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(joined, paragraph.text);
    }
});

//! A document under proofreading with its live suggestion list.

use crate::proofread::paragraph::{Paragraph, split_paragraphs};
use crate::proofread::reconcile::reconcile;
use crate::proofread::segment::Segment;
use crate::proofread::suggestion::Suggestion;

/// A document plus the suggestions currently open against it.
///
/// The host keeps one session per proofread document (resume summary,
/// cover letter) and drives it from the accept/reject affordances its
/// rendered segments carry. Accepting edits the text in place; remaining
/// suggestions keep their original offsets, so spans behind the edit can
/// go stale. The reconciliation sweep tolerates that by design: stale
/// spans render with a mismatch marker or get dropped instead of
/// misbehaving.
///
/// # Examples
///
/// ```
/// use careerdraft::ProofreadSession;
/// use careerdraft::parse_suggestions;
///
/// let payload = r#"[{
///     "originalText": "teh",
///     "suggestion": "the",
///     "explanation": "Typo.",
///     "startIndex": 6,
///     "endIndex": 9
/// }]"#;
/// let mut session =
///     ProofreadSession::with_suggestions("Fixed teh typo", parse_suggestions(payload)?);
///
/// assert!(session.accept("6-0"));
/// assert_eq!(session.text(), "Fixed the typo");
/// assert!(session.suggestions().is_empty());
/// # Ok::<(), careerdraft::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProofreadSession {
    text: String,
    suggestions: Vec<Suggestion>,
}

impl ProofreadSession {
    /// Create a session with no suggestions yet.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
        }
    }

    /// Create a session with an initial suggestion batch.
    #[must_use]
    pub fn with_suggestions(text: impl Into<String>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            text: text.into(),
            suggestions,
        }
    }

    /// The current document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The suggestions still open against the document.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Replace the document text, discarding all open suggestions.
    ///
    /// Suggestion offsets only mean anything for the text they were
    /// produced against, so a new draft starts with an empty batch.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.suggestions.clear();
    }

    /// Replace the open suggestion batch.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
    }

    /// Drop all open suggestions.
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
    }

    /// Apply a suggestion: replace the first occurrence of its claimed
    /// text and close it.
    ///
    /// The replacement is a plain first-occurrence string substitution,
    /// not an offset-based splice. When the claimed text no longer occurs
    /// (it went stale behind an earlier accept), the document is left
    /// unchanged but the suggestion is still closed. Returns `true` iff
    /// the id was an open suggestion.
    pub fn accept(&mut self, id: &str) -> bool {
        let Some(position) = self.suggestions.iter().position(|s| s.id == id) else {
            return false;
        };
        let accepted = self.suggestions.remove(position);
        self.text = self
            .text
            .replacen(&accepted.original_text, &accepted.suggestion, 1);
        tracing::debug!(id = %accepted.id, "accepted suggestion");
        true
    }

    /// Close a suggestion without touching the document.
    ///
    /// Returns `true` iff the id was an open suggestion.
    pub fn reject(&mut self, id: &str) -> bool {
        let Some(position) = self.suggestions.iter().position(|s| s.id == id) else {
            return false;
        };
        let rejected = self.suggestions.remove(position);
        tracing::debug!(id = %rejected.id, "rejected suggestion");
        true
    }

    /// Reconcile the open suggestions onto the current text.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'_>> {
        reconcile(&self.text, &self.suggestions)
    }

    /// Split the current text into paragraphs.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<Paragraph<'_>> {
        split_paragraphs(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(
        id: &str,
        original: &str,
        replacement: &str,
        start: usize,
        end: usize,
    ) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            original_text: original.to_string(),
            suggestion: replacement.to_string(),
            explanation: String::new(),
            start_index: start,
            end_index: end,
        }
    }

    #[test]
    fn test_accept_replaces_and_closes() {
        let mut session = ProofreadSession::with_suggestions(
            "I has a dream",
            vec![suggestion("2-0", "has", "have", 2, 5)],
        );

        assert!(session.accept("2-0"));
        assert_eq!(session.text(), "I have a dream");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_accept_replaces_only_first_occurrence() {
        let mut session = ProofreadSession::with_suggestions(
            "very very good",
            vec![suggestion("0-0", "very", "truly", 0, 4)],
        );

        session.accept("0-0");
        assert_eq!(session.text(), "truly very good");
    }

    #[test]
    fn test_accept_with_stale_claim_still_closes() {
        let mut session = ProofreadSession::with_suggestions(
            "nothing to see",
            vec![suggestion("0-0", "gone", "x", 0, 4)],
        );

        assert!(session.accept("0-0"));
        assert_eq!(session.text(), "nothing to see");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_accept_unknown_id_is_refused() {
        let mut session = ProofreadSession::new("text");
        assert!(!session.accept("9-9"));
        assert_eq!(session.text(), "text");
    }

    #[test]
    fn test_reject_closes_without_editing() {
        let mut session = ProofreadSession::with_suggestions(
            "I has a dream",
            vec![
                suggestion("2-0", "has", "have", 2, 5),
                suggestion("8-1", "dream", "plan", 8, 13),
            ],
        );

        assert!(session.reject("2-0"));
        assert_eq!(session.text(), "I has a dream");
        assert_eq!(session.suggestions().len(), 1);
        assert_eq!(session.suggestions()[0].id, "8-1");
        assert!(!session.reject("2-0"));
    }

    #[test]
    fn test_segments_track_session_state() {
        let mut session = ProofreadSession::with_suggestions(
            "I has a dream",
            vec![suggestion("2-0", "has", "have", 2, 5)],
        );

        let segments = session.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].suggestion_id(), Some("2-0"));

        session.accept("2-0");
        let segments = session.segments();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_flagged());
        assert_eq!(segments[0].text, "I have a dream");
    }

    #[test]
    fn test_set_text_discards_suggestions() {
        let mut session = ProofreadSession::with_suggestions(
            "draft one",
            vec![suggestion("0-0", "draft", "version", 0, 5)],
        );

        session.set_text("draft two");
        assert!(session.suggestions().is_empty());
        assert_eq!(session.text(), "draft two");
    }

    #[test]
    fn test_set_suggestions_replaces_open_batch() {
        let mut session = ProofreadSession::with_suggestions(
            "I has a dream",
            vec![suggestion("2-0", "has", "have", 2, 5)],
        );

        session.set_suggestions(vec![suggestion("8-0", "dream", "plan", 8, 13)]);

        let segments = session.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].suggestion_id(), Some("8-0"));
        assert!(!session.accept("2-0"));
        assert!(session.accept("8-0"));
        assert_eq!(session.text(), "I has a plan");
    }

    #[test]
    fn test_clear_suggestions_keeps_text() {
        let mut session = ProofreadSession::with_suggestions(
            "I has a dream",
            vec![
                suggestion("2-0", "has", "have", 2, 5),
                suggestion("8-1", "dream", "plan", 8, 13),
            ],
        );

        session.clear_suggestions();
        assert!(session.suggestions().is_empty());
        assert_eq!(session.text(), "I has a dream");

        let segments = session.segments();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_flagged());
        assert_eq!(segments[0].text, "I has a dream");
    }

    #[test]
    fn test_paragraphs_come_from_current_text() {
        let session = ProofreadSession::new("one\n\ntwo");
        let paragraphs = session.paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].text, "two");
    }
}

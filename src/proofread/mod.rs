//! Proofreading suggestions: ingestion, reconciliation, and sessions.
//!
//! The AI proofreading collaborator returns suggestion batches whose
//! offsets claim spans in a document. This module owns everything that
//! happens to a batch after it arrives:
//!
//! - [`parse_suggestions`] / [`sanitize_suggestions`]: validate the raw
//!   payload and assign stable ids
//! - [`reconcile`]: partition a text into plain and flagged [`Segment`]s,
//!   defensively handling overlapping and out-of-range spans
//! - [`split_paragraphs`] / [`paragraph_suggestions`]: render long
//!   documents paragraph by paragraph with offset translation
//! - [`ProofreadSession`]: a document plus its open suggestions, with
//!   accept/reject
//!
//! # Examples
//!
//! ```
//! use careerdraft::proofread::{reconcile, Suggestion};
//!
//! let text = "I has a dream";
//! let suggestions = vec![Suggestion {
//!     id: "2-0".to_string(),
//!     original_text: "has".to_string(),
//!     suggestion: "have".to_string(),
//!     explanation: "Subject-verb agreement.".to_string(),
//!     start_index: 2,
//!     end_index: 5,
//! }];
//!
//! let segments = reconcile(text, &suggestions);
//! let joined: String = segments.iter().map(|s| s.text).collect();
//! assert_eq!(joined, text);
//! assert!(segments[1].is_flagged());
//! ```

mod paragraph;
mod reconcile;
mod segment;
mod session;
mod suggestion;

pub use paragraph::{Paragraph, paragraph_suggestions, split_paragraphs};
pub use reconcile::reconcile;
pub use segment::{Segment, SegmentKind};
pub use session::ProofreadSession;
pub use suggestion::{RawSuggestion, Suggestion, parse_suggestions, sanitize_suggestions};

//! `careerdraft` - Editing engine for a resume and cover-letter builder
//!
//! The state-management core a form-driven editing host builds on:
//! snapshot-based undo/redo over the user's profile, reconciliation of
//! AI proofreading suggestions onto rendered text, and the supporting
//! value types, payload ingestion, shortcut classification, and keyword
//! analysis around them. Rendering, networking, and persistence stay in
//! the host.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Payload offsets are range-checked before casting
#![allow(clippy::cast_sign_loss)] // Payload offsets are validated non-negative before casting
#![allow(clippy::module_name_repetitions)] // Allow KeywordAnalysis, ProofreadSession etc
#![allow(clippy::missing_errors_doc)] // Error conditions covered by the type docs
#![allow(clippy::missing_panics_doc)] // Public API upholds the documented invariants
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod error;
pub mod history;
pub mod keys;
pub mod keywords;
pub mod profile;
pub mod proofread;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use history::History;
pub use keywords::{KeywordAnalysis, analyze_keywords, parse_keywords};
pub use profile::{CustomSection, Education, Profile, Referee, WorkExperience};

// Re-export keyboard types
pub use keys::{HistoryCommand, KeyCode, KeyEvent, KeyModifiers, Platform, Shortcuts};

// Re-export proofreading types
pub use proofread::{
    Paragraph, ProofreadSession, RawSuggestion, Segment, SegmentKind, Suggestion,
    paragraph_suggestions, parse_suggestions, reconcile, sanitize_suggestions, split_paragraphs,
};

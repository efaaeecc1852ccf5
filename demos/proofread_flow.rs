//! End-to-end proofreading walkthrough.
//!
//! Demonstrates:
//! - Parsing an AI proofreading payload into validated suggestions
//! - Rendering a cover letter as plain and flagged segments
//! - Accepting suggestions and re-rendering
//! - Undo/redo over profile snapshots with platform shortcuts

use careerdraft::{
    History, HistoryCommand, KeyCode, KeyEvent, Platform, Profile, ProofreadSession, Shortcuts,
    parse_suggestions, split_paragraphs,
};

const COVER_LETTER: &str = "Dear Hiring Manager,\n\nI am excited to apply for the Senior \
                            Frontend Engineer role. I has led teams before and I beleive my \
                            experience matches your needs.\n\nSincerely,\nAlex Doe";

/// The payload as the AI service returns it. The last entry has offsets no
/// text can satisfy and is dropped during sanitization.
const PAYLOAD: &str = r#"[
    {
        "originalText": "I has",
        "suggestion": "I have",
        "explanation": "Subject-verb agreement.",
        "startIndex": 83,
        "endIndex": 88
    },
    {
        "originalText": "beleive",
        "suggestion": "believe",
        "explanation": "Spelling.",
        "startIndex": 112,
        "endIndex": 119
    },
    {
        "originalText": "oops",
        "suggestion": "nope",
        "startIndex": -4,
        "endIndex": 2
    }
]"#;

fn print_segments(session: &ProofreadSession) {
    for segment in session.segments() {
        match segment.suggestion_id() {
            Some(id) if segment.is_mismatch() => {
                println!("  [mismatch {id}] {:?}", segment.text);
            }
            Some(id) => println!("  [flagged  {id}] {:?}", segment.text),
            None => println!("  [plain        ] {:?}", segment.text),
        }
    }
}

fn main() -> careerdraft::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let suggestions = parse_suggestions(PAYLOAD)?;
    println!("Parsed {} suggestions:", suggestions.len());
    for s in &suggestions {
        println!(
            "  {} {:?} -> {:?} ({})",
            s.id, s.original_text, s.suggestion, s.explanation
        );
    }

    let mut session = ProofreadSession::with_suggestions(COVER_LETTER, suggestions);
    println!("\nSegments:");
    print_segments(&session);

    println!("\nParagraphs:");
    for paragraph in split_paragraphs(session.text()) {
        println!("  @{:<4} {:?}", paragraph.start, paragraph.text);
    }

    for id in ["83-0", "112-1"] {
        let applied = session.accept(id);
        println!("\naccept({id}) -> {applied}");
    }
    println!("\nFinal letter:\n{}", session.text());

    // Profile editing drives a snapshot history via keyboard chords.
    let mut history = History::new(Profile::default());
    history.set(Profile::sample());
    let mut draft = history.current().clone();
    draft.summary = "Engineer focused on editor tooling.".to_string();
    history.set(draft);

    let shortcuts = Shortcuts::new(Platform::MacOs);
    println!("\nHistory ({} snapshots):", history.len());
    let chords = [
        KeyEvent::with_super(KeyCode::Char('z')),
        KeyEvent::with_super(KeyCode::Char('y')),
    ];
    for event in chords {
        let Some(command) = shortcuts.command(&event) else {
            continue;
        };
        let moved = match command {
            HistoryCommand::Undo => history.undo(),
            HistoryCommand::Redo => history.redo(),
        };
        println!(
            "  {command:?}: moved={moved}, summary={:?}",
            history.current().summary
        );
    }

    Ok(())
}

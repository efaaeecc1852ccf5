//! Keyboard chord classification for undo/redo shortcuts.
//!
//! The editing host owns its event loop; this module only decides what a
//! key chord means. [`Shortcuts::command`] maps an incoming [`KeyEvent`]
//! to a [`HistoryCommand`], honoring the platform's primary modifier
//! (Cmd on macOS, Ctrl elsewhere) and suppressing everything while the
//! host is in read-only mode (e.g., an admin impersonating a user).

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
        /// Super/Cmd/Windows key.
        const SUPER = 0b0000_1000;
    }
}

/// A key code as reported by the editing host.
///
/// Only character keys can form undo/redo chords; every other key the
/// host reports classifies to no command, so `Enter` is the only
/// non-character code modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Enter/Return key.
    Enter,
    /// A character key (includes space).
    Char(char),
}

impl KeyCode {
    /// Check if this is a character key.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// Create a Cmd+key event.
    #[must_use]
    pub fn with_super(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SUPER)
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }
}

/// Host platform, selecting which modifier acts as the primary chord key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// macOS: Cmd is the primary modifier.
    MacOs,
    /// Everything else: Ctrl is the primary modifier.
    #[default]
    Other,
}

impl Platform {
    /// The modifier that forms undo/redo chords on this platform.
    #[must_use]
    pub fn primary(self) -> KeyModifiers {
        match self {
            Self::MacOs => KeyModifiers::SUPER,
            Self::Other => KeyModifiers::CTRL,
        }
    }
}

/// A history operation requested via the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryCommand {
    /// Step backward in history.
    Undo,
    /// Step forward in history.
    Redo,
}

/// Undo/redo shortcut classifier.
///
/// Chords: primary+Z is undo; primary+Y and primary+Shift+Z are redo.
/// The letter match is case-insensitive and extra held modifiers are
/// ignored, matching how browsers report the chords. While `read_only`
/// is on, every event classifies to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shortcuts {
    /// Platform whose conventions apply.
    pub platform: Platform,
    /// Suppress all shortcuts (impersonation / read-only mode).
    pub read_only: bool,
}

impl Shortcuts {
    /// Create a classifier for a platform, shortcuts enabled.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            read_only: false,
        }
    }

    /// Toggle read-only suppression.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Classify a key event into a history command, if it is one.
    #[must_use]
    pub fn command(&self, event: &KeyEvent) -> Option<HistoryCommand> {
        if self.read_only {
            return None;
        }
        if !event.modifiers.contains(self.platform.primary()) {
            return None;
        }
        let c = event.code.char()?.to_ascii_lowercase();
        match c {
            'z' if event.shift() => Some(HistoryCommand::Redo),
            'z' => Some(HistoryCommand::Undo),
            'y' => Some(HistoryCommand::Redo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_creation() {
        let event = KeyEvent::char('a');
        assert_eq!(event.code, KeyCode::Char('a'));
        assert!(event.modifiers.is_empty());

        let event = KeyEvent::with_ctrl(KeyCode::Char('z'));
        assert!(event.ctrl());
        assert!(!event.shift());
    }

    #[test]
    fn test_key_code_queries() {
        assert!(KeyCode::Char('x').is_char());
        assert!(!KeyCode::Enter.is_char());
        assert_eq!(KeyCode::Char('x').char(), Some('x'));
        assert_eq!(KeyCode::Enter.char(), None);
    }

    #[test]
    fn test_undo_redo_chords_non_mac() {
        let shortcuts = Shortcuts::new(Platform::Other);

        let undo = KeyEvent::with_ctrl(KeyCode::Char('z'));
        assert_eq!(shortcuts.command(&undo), Some(HistoryCommand::Undo));

        let redo = KeyEvent::with_ctrl(KeyCode::Char('y'));
        assert_eq!(shortcuts.command(&redo), Some(HistoryCommand::Redo));

        let shift_redo = KeyEvent::new(
            KeyCode::Char('Z'),
            KeyModifiers::CTRL | KeyModifiers::SHIFT,
        );
        assert_eq!(shortcuts.command(&shift_redo), Some(HistoryCommand::Redo));
    }

    #[test]
    fn test_mac_uses_cmd_not_ctrl() {
        let shortcuts = Shortcuts::new(Platform::MacOs);

        let cmd_z = KeyEvent::with_super(KeyCode::Char('z'));
        assert_eq!(shortcuts.command(&cmd_z), Some(HistoryCommand::Undo));

        let ctrl_z = KeyEvent::with_ctrl(KeyCode::Char('z'));
        assert_eq!(shortcuts.command(&ctrl_z), None);
    }

    #[test]
    fn test_letter_match_is_case_insensitive() {
        let shortcuts = Shortcuts::new(Platform::Other);
        let upper = KeyEvent::with_ctrl(KeyCode::Char('Y'));
        assert_eq!(shortcuts.command(&upper), Some(HistoryCommand::Redo));
    }

    #[test]
    fn test_extra_modifiers_are_ignored() {
        let shortcuts = Shortcuts::new(Platform::Other);
        let chord = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CTRL | KeyModifiers::ALT);
        assert_eq!(shortcuts.command(&chord), Some(HistoryCommand::Undo));
    }

    #[test]
    fn test_unmodified_letters_do_nothing() {
        let shortcuts = Shortcuts::new(Platform::Other);
        assert_eq!(shortcuts.command(&KeyEvent::char('z')), None);
        assert_eq!(shortcuts.command(&KeyEvent::key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_read_only_suppresses_everything() {
        let mut shortcuts = Shortcuts::new(Platform::Other);
        shortcuts.set_read_only(true);

        let undo = KeyEvent::with_ctrl(KeyCode::Char('z'));
        assert_eq!(shortcuts.command(&undo), None);

        shortcuts.set_read_only(false);
        assert_eq!(shortcuts.command(&undo), Some(HistoryCommand::Undo));
    }

    #[test]
    fn test_non_letter_chords_are_not_commands() {
        let shortcuts = Shortcuts::new(Platform::Other);
        let chord = KeyEvent::with_ctrl(KeyCode::Char('s'));
        assert_eq!(shortcuts.command(&chord), None);
    }

    #[test]
    fn test_non_char_keys_never_form_chords() {
        let shortcuts = Shortcuts::new(Platform::Other);
        let chord = KeyEvent::with_ctrl(KeyCode::Enter);
        assert_eq!(shortcuts.command(&chord), None);
    }
}

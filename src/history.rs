//! Generic linear undo/redo history over value snapshots.
//!
//! This module provides [`History`], a container that records committed
//! states of an arbitrary value and lets the owner step backward and
//! forward through them. Editing hosts keep one instance per session,
//! commit every change through [`History::set`], and wire undo/redo
//! controls to [`History::undo`] and [`History::redo`].
//!
//! # Examples
//!
//! ```
//! use careerdraft::History;
//!
//! let mut history = History::new(String::from("draft"));
//! history.set(String::from("draft v2"));
//! history.set(String::from("draft v3"));
//!
//! history.undo();
//! assert_eq!(history.current(), "draft v2");
//!
//! // A new commit after undo discards the redo branch
//! history.set(String::from("draft v2 final"));
//! assert!(!history.can_redo());
//! ```

/// Linear snapshot history with a movable cursor.
///
/// Invariants:
/// - `snapshots` always holds at least one entry (the initial snapshot).
/// - `index` is always a valid position in `snapshots`.
///
/// History is linear, not a tree: committing a new value while the cursor
/// sits behind the newest snapshot discards everything past the cursor.
/// [`History::reset`] is a hard boundary that drops all recorded state,
/// so a reset cannot be undone.
#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: Vec<T>,
    index: usize,
    /// Maximum number of snapshots to retain. Oldest entries are dropped
    /// when exceeded. `None` means unbounded.
    max_depth: Option<usize>,
}

impl<T> History<T> {
    /// Create a history holding a single initial snapshot.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            max_depth: None,
        }
    }

    /// Create a history with a cap on retained snapshots.
    ///
    /// The cap is clamped to at least 1 so the initial snapshot is never
    /// evicted out from under the cursor.
    #[must_use]
    pub fn with_max_depth(initial: T, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(1)),
            ..Self::new(initial)
        }
    }

    /// The snapshot the cursor points at.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.snapshots[self.index]
    }

    /// Step the cursor backward one snapshot.
    ///
    /// Saturates at the oldest snapshot. Returns `true` if the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step the cursor forward one snapshot.
    ///
    /// Saturates at the newest snapshot. Returns `true` if the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.index + 1 >= self.snapshots.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Whether a snapshot exists behind the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a snapshot exists ahead of the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Drop all recorded history and start over from `value`.
    ///
    /// Used for bulk operations like loading sample data or clearing a
    /// form, which must not be undoable back to the pre-reset state.
    pub fn reset(&mut self, value: T) {
        self.snapshots.clear();
        self.snapshots.push(value);
        self.index = 0;
    }

    /// Number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a history holds at least one snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The configured snapshot cap, if any.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Set a cap on retained snapshots (clamped to at least 1).
    ///
    /// Enforced on the next commit; already-recorded snapshots are kept
    /// until then.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = Some(max_depth.max(1));
    }
}

impl<T: PartialEq> History<T> {
    /// Commit a new snapshot and move the cursor to it.
    ///
    /// Any snapshots ahead of the cursor (the redo branch) are discarded
    /// first, so history stays linear. Committing a value equal to the
    /// current snapshot is skipped entirely, leaving the redo branch
    /// intact, so repeated idempotent edits do not pollute history.
    pub fn set(&mut self, value: T) {
        if value == *self.current() {
            return;
        }
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(value);
        // Enforce depth limit by dropping oldest entries
        if let Some(max) = self.max_depth {
            if self.snapshots.len() > max {
                let excess = self.snapshots.len() - max;
                self.snapshots.drain(..excess);
            }
        }
        self.index = self.snapshots.len() - 1;
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

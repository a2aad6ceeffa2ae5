//! Bounded snapshot stack for undo and redo.
//!
//! LIFO: `push` and `pop` act on the newest entry. When a limit is set and
//! exceeded, the oldest entry is discarded.

use im::Vector;

use crate::core::GameState;

/// A stack of game snapshots, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotStack {
    entries: Vector<GameState>,
    limit: Option<usize>,
}

impl SnapshotStack {
    /// Create an empty stack with an optional size limit.
    #[must_use]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: Vector::new(),
            limit,
        }
    }

    /// Rebuild a stack from stored entries (oldest first), applying the limit.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = GameState>, limit: Option<usize>) -> Self {
        let mut stack = Self::new(limit);
        for entry in entries {
            stack.push(entry);
        }
        stack
    }

    /// Push a snapshot, evicting the oldest if over the limit.
    pub fn push(&mut self, snapshot: GameState) {
        self.entries.push_back(snapshot);

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    /// Pop the newest snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.entries.pop_back()
    }

    /// The newest snapshot, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&GameState> {
        self.entries.back()
    }

    /// Remove every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameState> {
        self.entries.iter()
    }

    /// Copy the entries out, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<GameState> {
        self.entries.iter().cloned().collect()
    }
}

//! Snapshot-based undo/redo history.
//!
//! Two stacks of whole-store snapshots: `past` (LIFO, oldest first) and
//! `future` (FIFO, produced only by undo, consumed only by redo). Any new
//! committed mutation invalidates the redo history, matching standard editor
//! semantics.
//!
//! `past` is capped at [`MAX_HISTORY_STATES`]; the oldest entry is dropped
//! when the cap is exceeded.

use std::collections::VecDeque;

use crate::constants::MAX_HISTORY_STATES;
use crate::types::Snapshot;

#[derive(Debug, Default)]
pub struct History {
    past: Vec<Snapshot>,
    future: VecDeque<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a pre-mutation snapshot onto the past stack and clear the future.
    ///
    /// Called by every committed mutation except undo/redo themselves, which
    /// would otherwise corrupt the opposite stack.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        if self.past.len() > MAX_HISTORY_STATES {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back: returns the snapshot to restore, or `None` when there is
    /// nothing to undo. `current` is the pre-undo store state, kept for redo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop()?;
        self.future.push_front(current);
        Some(previous)
    }

    /// Step forward: symmetric to [`History::undo`]. `current` is the
    /// pre-redo store state, kept for a subsequent undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop_front()?;
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of past states currently held.
    pub fn len(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }
}

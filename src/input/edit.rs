//! Inline edit handling - selection, draft buffer, commit, cancel.
//!
//! The draft buffer is invisible to history and to the store: only a commit
//! writes the value through and records a history entry. Cancel discards the
//! draft with no trace.

use tracing::debug;

use crate::engine::CanvasEngine;
use crate::error::{EngineError, EngineResult};
use crate::store::ItemPatch;

impl CanvasEngine {
    /// Select an item and open an edit session on it, loading its current
    /// value as the draft buffer.
    ///
    /// Selection persists independently of editing; the font-size command
    /// uses it after the session ends. Selecting while already editing
    /// replaces the session and discards the previous draft - a renderer
    /// that wants blur-commit semantics sends `commit_edit` first.
    pub fn select_and_edit(&mut self, id: u64) -> EngineResult<()> {
        let item = self.store.get(id).ok_or(EngineError::NotFound(id))?;
        self.selected_id = Some(id);
        let value = item.value.clone();
        self.edit.start(id, value);
        debug!(id, "edit session started");
        Ok(())
    }

    /// Overwrite the draft buffer. No store mutation, no history entry.
    /// Ignored while no edit session is active.
    pub fn change_edit_buffer(&mut self, text: impl Into<String>) {
        self.edit.set_buffer(text);
    }

    /// Finalize the draft into the store, recording the pre-mutation
    /// snapshot as one history entry, and end the session.
    ///
    /// A commit on an id no longer in the store (possible once deletion
    /// exists) is a no-op that still returns to idle. Ignored while no edit
    /// session is active.
    pub fn commit_edit(&mut self) {
        let Some((id, buffer)) = self.edit.finish() else {
            return;
        };
        if self.store.get(id).is_none() {
            return;
        }

        self.history.record(self.store.snapshot());
        // Cannot fail: existence checked above, nothing ran in between.
        let _ = self.store.update(id, ItemPatch::value(buffer));
        debug!(id, "edit committed");
    }

    /// Discard the draft and end the session with no store mutation and no
    /// history entry. Ignored while no edit session is active.
    pub fn cancel_edit(&mut self) {
        if self.edit.is_editing() {
            self.edit.reset();
            debug!("edit cancelled");
        }
    }
}

//! Drag gesture handling - pointer events into item position updates.
//!
//! Pointer moves arrive very frequently during a drag (60+ per second), so
//! each move writes the item's position directly without touching history.
//! The whole gesture collapses to one undoable step: the store snapshot taken
//! at pointer-down is recorded exactly once at pointer-up.

use tracing::{debug, trace};

use crate::engine::CanvasEngine;
use crate::error::{EngineError, EngineResult};
use crate::store::ItemPatch;

impl CanvasEngine {
    /// Begin a drag gesture on the given item.
    ///
    /// Captures the pointer-to-item-origin offset so the grab point stays
    /// stable under the cursor, and retains the pre-drag snapshot for the
    /// gesture's single history entry. No history is recorded here - nothing
    /// has changed yet.
    ///
    /// Ignored while another gesture is already in progress: one active
    /// gesture at a time preserves the one-history-entry-per-gesture rule.
    pub fn begin_drag(&mut self, id: u64, pointer: (f32, f32)) -> EngineResult<()> {
        if self.drag.is_dragging() {
            return Ok(());
        }

        let item = self.store.get(id).ok_or(EngineError::NotFound(id))?;
        let grab_offset = (pointer.0 - item.position.0, pointer.1 - item.position.1);
        let baseline = self.store.snapshot();

        self.drag.start(id, grab_offset, baseline);
        debug!(id, "drag started");
        Ok(())
    }

    /// Move the dragged item under the pointer.
    ///
    /// A live, uncommitted, continuously-overwritten visual update: applied
    /// in arrival order, last write wins, never recorded in history. Ignored
    /// while no drag is in progress - pointer moves routinely arrive after an
    /// unrelated mouse-up elsewhere.
    pub fn move_drag(&mut self, pointer: (f32, f32)) {
        let (Some(id), Some(offset)) = (self.drag.dragged_item_id(), self.drag.grab_offset())
        else {
            return;
        };

        let position = (pointer.0 - offset.0, pointer.1 - offset.1);
        // The dragged item cannot disappear mid-gesture today; a stale id
        // just ends the gesture without touching the store.
        if self.store.update(id, ItemPatch::position(position)).is_err() {
            self.drag.reset();
            return;
        }
        trace!(id, x = position.0, y = position.1, "drag move");
    }

    /// Finish the drag gesture, recording the pre-drag snapshot as the
    /// gesture's single history entry. Ignored while idle.
    pub fn end_drag(&mut self) {
        if let Some(baseline) = self.drag.finish() {
            self.history.record(baseline);
            debug!("drag finished");
        }
    }
}

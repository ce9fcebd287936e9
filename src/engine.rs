//! Canvas engine - the composition root.
//!
//! Owns one item store, one history manager, the drag and edit state
//! machines, the current selection, and the global font size. All commands
//! route through here; the rendering layer re-renders after each command
//! using [`CanvasEngine::items`] as the sole source of truth.
//!
//! The engine is single-threaded and synchronous: every command runs to
//! completion before the next is admitted, and `&mut self` on every command
//! makes concurrent mutation unrepresentable. One engine instance per canvas;
//! there is no ambient or static state.

use tracing::debug;

use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_POSITION, DEFAULT_TEXT, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::{EngineError, EngineResult};
use crate::history::History;
use crate::input::{DragState, EditState};
use crate::store::{ItemPatch, ItemStore};
use crate::types::TextItem;

pub struct CanvasEngine {
    pub(crate) store: ItemStore,
    pub(crate) history: History,
    pub(crate) drag: DragState,
    pub(crate) edit: EditState,
    pub(crate) selected_id: Option<u64>,
    pub(crate) global_font_size: u32,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasEngine {
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(),
            history: History::new(),
            drag: DragState::Idle,
            edit: EditState::Idle,
            selected_id: None,
            global_font_size: DEFAULT_FONT_SIZE,
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Add a new text item with the default value and position and the
    /// current global font size. Returns the new item's id.
    pub fn add_text(&mut self) -> u64 {
        self.history.record(self.store.snapshot());
        let id = self
            .store
            .create(DEFAULT_TEXT, DEFAULT_POSITION, self.global_font_size);
        debug!(id, "added text item");
        id
    }

    /// Step back one committed mutation. Returns false when there is nothing
    /// to undo; the store is left unchanged in that case.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.restore(snapshot);
                debug!("undo");
                true
            }
            None => false,
        }
    }

    /// Step forward one undone mutation. Returns false when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.restore(snapshot);
                debug!("redo");
                true
            }
            None => false,
        }
    }

    /// Set the font size applied to newly created items and, when an item is
    /// selected, retroactively to that selection (as one undoable step).
    ///
    /// Sizes outside `MIN_FONT_SIZE..=MAX_FONT_SIZE` are rejected rather than
    /// clamped, leaving all state unchanged; the surrounding UI may clamp
    /// before calling if it prefers.
    pub fn set_global_font_size(&mut self, size: u32) -> EngineResult<()> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(EngineError::invalid_font_size(size));
        }

        self.global_font_size = size;

        // A selected item picks up the new size as a committed mutation.
        // No selection, or a selection gone stale, changes the global only
        // and leaves history alone.
        if let Some(id) = self.selected_id {
            if self.store.get(id).is_some() {
                self.history.record(self.store.snapshot());
                self.store.update(id, ItemPatch::font_size(size))?;
                debug!(id, size, "applied font size to selection");
            }
        }
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All items in insertion order (later items render on top).
    pub fn items(&self) -> &[TextItem] {
        self.store.items()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The in-progress draft text, if an edit session is active.
    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit.buffer()
    }

    /// The item currently being edited, if any.
    pub fn editing_id(&self) -> Option<u64> {
        self.edit.editing_item_id()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn global_font_size(&self) -> u32 {
        self.global_font_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Serialize the current items as pretty JSON, for collaborators that
    /// export or inspect state. This is data exchange, not persistence.
    pub fn items_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.store.items())
    }
}

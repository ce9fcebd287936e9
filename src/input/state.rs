//! Interaction state machines - explicit states for dragging and editing.
//!
//! Explicit enums instead of scattered flags make impossible states
//! unrepresentable: there is no way to have a grab offset without a dragged
//! item, or a draft buffer without an item being edited.
//!
//! ## State Transitions
//!
//! ```text
//! Drag:  Idle -> Dragging   (pointer down on an item)
//!        Dragging -> Idle   (pointer up - records one history entry)
//!
//! Edit:  Idle -> Editing    (item selected for editing)
//!        Editing -> Idle    (commit or cancel)
//! ```
//!
//! Pointer moves and pointer ups arriving while `Idle` are ignored, not
//! errors - they routinely arrive after an unrelated mouse-up elsewhere.

use crate::types::Snapshot;

/// State of the drag gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No active drag gesture
    #[default]
    Idle,

    /// A drag gesture is in progress
    Dragging {
        /// Item being dragged
        item_id: u64,
        /// Pointer-to-item-origin displacement captured at drag start,
        /// keeps the grab point stable under the cursor
        grab_offset: (f32, f32),
        /// Store state as it was when the gesture began; recorded as the
        /// single history entry when the gesture completes
        baseline: Snapshot,
    },
}

impl DragState {
    /// Returns true if a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<u64> {
        match self {
            Self::Dragging { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Get the grab offset, if dragging
    pub fn grab_offset(&self) -> Option<(f32, f32)> {
        match self {
            Self::Dragging { grab_offset, .. } => Some(*grab_offset),
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start a drag gesture
    pub fn start(&mut self, item_id: u64, grab_offset: (f32, f32), baseline: Snapshot) {
        *self = Self::Dragging {
            item_id,
            grab_offset,
            baseline,
        };
    }

    /// Finish the gesture, handing back the baseline snapshot for recording.
    pub fn finish(&mut self) -> Option<Snapshot> {
        match std::mem::take(self) {
            Self::Dragging { baseline, .. } => Some(baseline),
            Self::Idle => None,
        }
    }
}

/// State of the inline-edit state machine.
#[derive(Debug, Clone, Default)]
pub enum EditState {
    /// No edit session active
    #[default]
    Idle,

    /// An edit session is active
    Editing {
        /// Item being edited
        item_id: u64,
        /// In-progress, uncommitted text - invisible to history/undo
        buffer: String,
    },
}

impl EditState {
    /// Returns true if an edit session is active
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the item ID being edited, if any
    pub fn editing_item_id(&self) -> Option<u64> {
        match self {
            Self::Editing { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Get the draft buffer, if editing
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Overwrite the draft buffer; ignored while Idle
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let Self::Editing { buffer, .. } = self {
            *buffer = text.into();
        }
    }

    /// Start an edit session with the item's current value as the draft
    pub fn start(&mut self, item_id: u64, buffer: impl Into<String>) {
        *self = Self::Editing {
            item_id,
            buffer: buffer.into(),
        };
    }

    /// End the session, handing back the item id and draft for committing.
    pub fn finish(&mut self) -> Option<(u64, String)> {
        match std::mem::take(self) {
            Self::Editing { item_id, buffer } => Some((item_id, buffer)),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state, discarding any draft
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

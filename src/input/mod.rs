//! Interaction handling for the canvas.
//!
//! This module implements the two interaction state machines and the engine
//! commands that drive them.
//!
//! ## Architecture
//!
//! Explicit state machine enums (`DragState`, `EditState`) track the current
//! interaction mode instead of scattered flags, making impossible states
//! unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Drag and edit state machine enums and helper methods
//! - `drag` - Drag gesture commands (begin, move, end)
//! - `edit` - Edit session commands (select, buffer change, commit, cancel)

mod state;
mod drag;
mod edit;

pub use state::{DragState, EditState};

//! textboard - in-memory state engine for a direct-manipulation canvas of
//! movable, editable text labels, with undo/redo.
//!
//! The crate is headless: rendering and raw event wiring live outside. A
//! collaborator translates pointer/keyboard/focus events into the normalized
//! commands on [`CanvasEngine`] and re-renders after each command using
//! [`CanvasEngine::items`] as the sole source of truth.
//!
//! ## Architecture
//!
//! - [`store`] - the current set of text items; pure data, CRUD only
//! - [`history`] - past/future stacks of whole-store snapshots
//! - [`input`] - drag and edit state machines and their commands
//! - [`engine`] - composition root exposing the command/query API
//!
//! ## Example
//!
//! ```ignore
//! use textboard::CanvasEngine;
//!
//! let mut engine = CanvasEngine::new();
//! let id = engine.add_text();
//! engine.begin_drag(id, (120.0, 80.0))?;
//! engine.move_drag((140.0, 90.0));
//! engine.end_drag();
//! assert!(engine.undo());
//! ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod store;
pub mod types;

pub use engine::CanvasEngine;
pub use error::{EngineError, EngineResult};
pub use store::{ItemPatch, ItemStore};
pub use types::{Snapshot, TextItem};

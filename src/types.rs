//! Core types for the textboard canvas system.
//!
//! This module defines the fundamental data structures shared across the
//! engine: the text item placed on the canvas and the whole-store snapshot
//! used as the history stack element.

use serde::{Deserialize, Serialize};

/// A movable, editable text label placed on the canvas.
///
/// Each item has a unique ID assigned at creation, a position in canvas
/// coordinates, and a per-item font size. Items later in the store render
/// on top of earlier ones (rendering itself lives outside this crate).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    /// Unique identifier for this item, immutable for its lifetime
    pub id: u64,
    /// The text content
    pub value: String,
    /// Position on the canvas in canvas coordinates (x, y)
    pub position: (f32, f32),
    /// Font size in points
    pub font_size: u32,
}

/// An immutable deep copy of the entire item collection at one instant.
///
/// Snapshots are what the history stacks hold: one is taken *before* every
/// committed mutation, so undo can restore the exact pre-mutation store.
pub type Snapshot = Vec<TextItem>;

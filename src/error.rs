//! Error types for engine commands.
//!
//! Provides unified error handling for all command operations. Every failure
//! leaves the engine untouched: commands are atomic, either fully applied
//! (including their history entry) or not applied at all.
//!
//! Undo/redo on an empty stack is deliberately *not* an error; those commands
//! return `false` to signal the defined idle result.

use thiserror::Error;

// Re-export font size bounds from constants module for consistency
pub use crate::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Errors that can occur during engine commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An operation referenced an item id absent from the store
    #[error("item {0} not found")]
    NotFound(u64),

    /// Font size outside the accepted inclusive range
    #[error("font size {size} outside accepted range {min}..={max}")]
    InvalidFontSize { size: u32, min: u32, max: u32 },
}

impl EngineError {
    pub(crate) fn invalid_font_size(size: u32) -> Self {
        Self::InvalidFontSize {
            size,
            min: MIN_FONT_SIZE,
            max: MAX_FONT_SIZE,
        }
    }
}

/// Result type alias for engine commands
pub type EngineResult<T> = Result<T, EngineError>;

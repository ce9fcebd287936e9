//! Application-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Item Defaults
// ============================================================================

/// Default text content for newly created items
pub const DEFAULT_TEXT: &str = "New Text";

/// Default position for newly created items, in canvas coordinates
pub const DEFAULT_POSITION: (f32, f32) = (50.0, 50.0);

/// Default font size for text items
pub const DEFAULT_FONT_SIZE: u32 = 16;

// ============================================================================
// Font Size Bounds
// ============================================================================

/// Minimum accepted font size (matches the range of the external numeric input)
pub const MIN_FONT_SIZE: u32 = 10;

/// Maximum accepted font size (matches the range of the external numeric input)
pub const MAX_FONT_SIZE: u32 = 100;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep.
///
/// History entries are whole-store snapshots, so this bounds memory at roughly
/// `MAX_HISTORY_STATES * item_count * item size`. When the cap is hit the
/// oldest entry is dropped.
pub const MAX_HISTORY_STATES: usize = 50;

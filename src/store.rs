//! Item store - the current set of text items.
//!
//! Pure data with CRUD operations; all behavior (gestures, history, commands)
//! lives in the engine and input modules. Insertion order is preserved and
//! meaningful: later items render on top.

use crate::error::{EngineError, EngineResult};
use crate::types::{Snapshot, TextItem};

/// Partial update applied to a single item.
///
/// Only the fields that are `Some` are written; everything else is left
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct ItemPatch {
    pub value: Option<String>,
    pub position: Option<(f32, f32)>,
    pub font_size: Option<u32>,
}

impl ItemPatch {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn position(position: (f32, f32)) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn font_size(font_size: u32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Default::default()
        }
    }
}

/// Ordered collection of text items with unique ids.
///
/// Ids come from a monotonic counter rather than a timestamp, so uniqueness
/// holds even under rapid successive creation within the same instant. The
/// counter is not part of snapshots: undoing a creation and creating again
/// never reuses an id.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<TextItem>,
    next_item_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new item and return its id.
    pub fn create(&mut self, value: impl Into<String>, position: (f32, f32), font_size: u32) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(TextItem {
            id,
            value: value.into(),
            position,
            font_size,
        });
        id
    }

    /// Look up an item by id.
    pub fn get(&self, id: u64) -> Option<&TextItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Apply a partial update to the item with the given id.
    ///
    /// An absent id signals `NotFound` and mutates nothing.
    pub fn update(&mut self, id: u64, patch: ItemPatch) -> EngineResult<&TextItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(EngineError::NotFound(id))?;

        if let Some(value) = patch.value {
            item.value = value;
        }
        if let Some(position) = patch.position {
            item.position = position;
        }
        if let Some(font_size) = patch.font_size {
            item.font_size = font_size;
        }
        Ok(item)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// Deep copy of the current item collection.
    pub fn snapshot(&self) -> Snapshot {
        self.items.clone()
    }

    /// Replace the item collection with a previously taken snapshot.
    ///
    /// The id counter is intentionally left alone so restored stores keep
    /// producing fresh ids.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.items = snapshot;
    }
}

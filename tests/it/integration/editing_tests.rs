//! Inline edit workflow tests.

use crate::helpers::{assert_item_value, empty_engine, engine_with_item, set_item_value};
use textboard::constants::DEFAULT_TEXT;
use textboard::EngineError;

#[test]
fn test_commit_writes_buffer_through_and_is_undoable() {
    let (mut engine, id) = engine_with_item();

    engine.select_and_edit(id).unwrap();
    assert_eq!(engine.edit_buffer(), Some(DEFAULT_TEXT));
    engine.change_edit_buffer("Hello");
    engine.commit_edit();

    assert_item_value(&engine, id, "Hello");
    assert_eq!(engine.edit_buffer(), None);

    assert!(engine.undo());
    assert_item_value(&engine, id, DEFAULT_TEXT);
}

#[test]
fn test_buffer_changes_are_invisible_until_commit() {
    let (mut engine, id) = engine_with_item();
    engine.select_and_edit(id).unwrap();
    engine.change_edit_buffer("draft one");
    engine.change_edit_buffer("draft two");

    // Store still shows the committed value, and no history accumulated.
    assert_item_value(&engine, id, DEFAULT_TEXT);
    assert_eq!(engine.edit_buffer(), Some("draft two"));
}

#[test]
fn test_cancel_discards_draft_without_touching_store_or_history() {
    let (mut engine, id) = engine_with_item();
    let before = engine.items().to_vec();

    engine.select_and_edit(id).unwrap();
    engine.change_edit_buffer("never committed");
    let can_undo_before = engine.can_undo();
    engine.cancel_edit();

    assert_eq!(engine.items(), before.as_slice());
    assert_eq!(engine.can_undo(), can_undo_before);
    assert_eq!(engine.edit_buffer(), None);
    assert_eq!(engine.editing_id(), None);
}

#[test]
fn test_selection_persists_after_edit_session_ends() {
    let (mut engine, id) = engine_with_item();
    engine.select_and_edit(id).unwrap();
    engine.commit_edit();

    assert_eq!(engine.selected_id(), Some(id));
    assert_eq!(engine.editing_id(), None);
}

#[test]
fn test_select_absent_item_is_not_found() {
    let mut engine = empty_engine();
    let err = engine.select_and_edit(9).unwrap_err();
    assert_eq!(err, EngineError::NotFound(9));
    assert_eq!(engine.selected_id(), None);
    assert_eq!(engine.editing_id(), None);
}

#[test]
fn test_commit_and_cancel_while_idle_are_ignored() {
    let (mut engine, id) = engine_with_item();
    let before = engine.items().to_vec();

    engine.commit_edit();
    engine.cancel_edit();
    engine.change_edit_buffer("nowhere to go");

    assert_eq!(engine.items(), before.as_slice());
    assert_item_value(&engine, id, DEFAULT_TEXT);
}

#[test]
fn test_reselect_while_editing_replaces_draft() {
    let mut engine = empty_engine();
    let a = engine.add_text();
    let b = engine.add_text();
    set_item_value(&mut engine, b, "second");

    engine.select_and_edit(a).unwrap();
    engine.change_edit_buffer("abandoned draft");
    engine.select_and_edit(b).unwrap();
    assert_eq!(engine.edit_buffer(), Some("second"));
    engine.commit_edit();

    // The abandoned draft never reached the store.
    assert_item_value(&engine, a, DEFAULT_TEXT);
    assert_item_value(&engine, b, "second");
}

#[test]
fn test_sequential_edits_undo_one_at_a_time() {
    let (mut engine, id) = engine_with_item();
    set_item_value(&mut engine, id, "version 2");
    set_item_value(&mut engine, id, "version 3");

    assert!(engine.undo());
    assert_item_value(&engine, id, "version 2");
    assert!(engine.undo());
    assert_item_value(&engine, id, DEFAULT_TEXT);

    assert!(engine.redo());
    assert_item_value(&engine, id, "version 2");
}

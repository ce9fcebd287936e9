//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the serialized shape of the data-model types that
//! collaborators consume. To update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use textboard::TextItem;

#[test]
fn snapshot_text_item_json() {
    let item = TextItem {
        id: 1,
        value: "Hello, canvas".to_string(),
        position: (70.0, 60.0),
        font_size: 24,
    };
    insta::assert_json_snapshot!(item, @r###"
    {
      "id": 1,
      "value": "Hello, canvas",
      "position": [
        70.0,
        60.0
      ],
      "font_size": 24
    }
    "###);
}

#[test]
fn snapshot_freshly_added_item_json() {
    let mut engine = textboard::CanvasEngine::new();
    engine.add_text();
    insta::assert_json_snapshot!(engine.items(), @r###"
    [
      {
        "id": 0,
        "value": "New Text",
        "position": [
          50.0,
          50.0
        ],
        "font_size": 16
      }
    ]
    "###);
}

#[test]
fn test_text_item_round_trips_through_json() {
    let item = TextItem {
        id: 7,
        value: "label".to_string(),
        position: (1.5, -2.0),
        font_size: 10,
    };
    let json = serde_json::to_string(&item).unwrap();
    let back: TextItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}

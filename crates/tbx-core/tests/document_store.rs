//! Integration tests: document store → JSON shape.
//!
//! Exercises the `tbx-core` pipeline the front end relies on: store
//! mutations, id allocation, and the serialized document.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use tbx_core::*;

// ─── Id allocation ───────────────────────────────────────────────────────

#[test]
fn ids_distinct_across_add_delete_sequences() {
    let mut store = DocumentStore::new();
    let mut seen = HashSet::new();

    for round in 0..20 {
        let id = store.add_box(Style::default());
        assert!(seen.insert(id), "id {id} handed out twice");
        // Delete every third box, including the newest
        if round % 3 == 0 {
            store.remove(id);
        }
    }

    assert_eq!(seen.len(), 20);
    assert_eq!(store.len(), 13);
}

#[test]
fn restoring_old_snapshot_does_not_rewind_ids() {
    let mut store = DocumentStore::new();
    let empty = store.document().clone();
    let a = store.add_box(Style::default());
    store.replace_document(empty);
    let b = store.add_box(Style::default());
    assert_ne!(a, b);
}

// ─── Serialized shape ────────────────────────────────────────────────────

#[test]
fn document_json_matches_front_end_shape() {
    let mut store = DocumentStore::new();
    let id = store.add_box(Style::with_font(18, FontFamily::CourierNew));
    store.update_text(id, "Hi");
    store.move_to(id, 12.5, 80.0);
    store.update_style(id, |s| style::toggle(s, StyleOp::Align));

    let json: serde_json::Value = serde_json::from_str(&store.document().to_json()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "tb_0",
            "position": { "x": 12.5, "y": 80.0 },
            "size": { "width": 150.0, "height": 50.0 },
            "text": "Hi",
            "style": {
                "fontWeight": "normal",
                "fontStyle": "normal",
                "textDecoration": "none",
                "textAlign": "center",
                "fontSize": 18,
                "fontFamily": "Courier New",
                "backgroundColor": "transparent"
            }
        }])
    );
}

#[test]
fn imported_document_continues_allocation() {
    let mut store = DocumentStore::new();
    store.add_box(Style::default());
    store.add_box(Style::default());
    let doc = Document::from_json(&store.document().to_json()).unwrap();

    let mut restored = DocumentStore::from_document(doc);
    let id = restored.add_box(Style::default());
    assert_eq!(id.as_str(), "tb_2");
    assert_eq!(restored.len(), 3);
}

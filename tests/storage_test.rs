// Persistence: the versioned per-cell schema round-trips the table, rejects
// foreign versions, and reports corruption as a typed error.

use table_editor_wasm::models::style::apply_color;
use table_editor_wasm::models::{
    BandKind, CellAddr, ClickModifiers, ColorTarget, SelectionModel, TableDoc, ThemeRole,
};
use table_editor_wasm::storage::{
    cell_key, decode, encode, parse_cell_key, restore, snapshot, LoadError, SCHEMA_VERSION,
};

fn addr(row: usize, col: usize) -> CellAddr {
    CellAddr { row, col }
}

fn styled_doc() -> TableDoc {
    let mut doc = TableDoc::with_bands(4, 2, 2);
    doc.set_cell_text(addr(1, 0), "Name");
    doc.set_cell_text(addr(2, 0), "Alice");
    doc.set_cell_text(addr(5, 3), "Total");
    doc.cell_mut(addr(2, 0)).unwrap().style.color = Some("#1E90FF".to_string());
    doc.cell_mut(addr(5, 3)).unwrap().style.font_size_px = Some(24.0);
    doc.set_column_width(0, 120.0);
    doc.set_row_height(2, 44.5);
    doc.theme.set(ThemeRole::HeaderBackground, "#333333");
    doc.title = Some("Quarterly numbers".to_string());
    doc
}

#[test]
fn save_then_load_round_trips_the_table() {
    let doc = styled_doc();
    let state = snapshot(&doc, ColorTarget::Background, Some("header-background".into()));

    let raw = encode(&state).unwrap();
    let decoded = decode(&raw).unwrap();
    assert_eq!(decoded, state);

    let restored = restore(&decoded);
    assert_eq!(restored, doc, "restore must reproduce text, styles, and sizes");
    assert_eq!(decoded.color_target, ColorTarget::Background);
    assert_eq!(decoded.last_color_input.as_deref(), Some("header-background"));
}

#[test]
fn round_trip_survives_row_mutation() {
    let mut doc = styled_doc();
    let index = doc.add_row(BandKind::Top).unwrap();
    doc.set_cell_text(addr(index, 1), "added later");

    let raw = encode(&snapshot(&doc, ColorTarget::Text, None)).unwrap();
    let restored = restore(&decode(&raw).unwrap());

    assert_eq!(restored.rows.len(), doc.rows.len());
    assert_eq!(restored.cell(addr(index, 1)).unwrap().text, "added later");
    assert_eq!(restored, doc);
}

#[test]
fn applied_background_lands_in_the_cell_record() {
    let mut doc = TableDoc::with_bands(4, 2, 2);
    let mut sel = SelectionModel::new();
    // Row 2, col 0 is the first top data cell — the page's cell (0, 0).
    sel.click(&doc, addr(2, 0), ClickModifiers::plain());
    apply_color(&mut doc, &sel, "#FF0000", ColorTarget::Background, false).unwrap();

    let state = snapshot(&doc, ColorTarget::Background, None);
    let record = state
        .cells
        .get("cell-2-0")
        .expect("styled cell must have a persisted record");
    assert_eq!(record.background_color.as_deref(), Some("#FF0000"));
    assert_eq!(record.color, None);

    let raw = encode(&state).unwrap();
    assert!(
        raw.contains("\"cell-2-0\"") && raw.contains("\"backgroundColor\":\"#FF0000\""),
        "stored JSON should carry the keyed record: {}",
        raw
    );
}

#[test]
fn untouched_cells_get_no_record() {
    let doc = styled_doc();
    let state = snapshot(&doc, ColorTarget::Text, None);

    assert!(state.cells.contains_key("cell-2-0"));
    assert!(!state.cells.contains_key("cell-2-1"), "the record map is sparse");
    // Fixed chrome is regenerated, never persisted.
    assert!(!state.cells.contains_key("cell-0-0"));
}

#[test]
fn corrupt_json_is_a_typed_error() {
    assert!(matches!(decode("not json at all"), Err(LoadError::Corrupt(_))));
    assert!(matches!(
        decode(&format!("{{\"version\": {}, \"cells\": 5}}", SCHEMA_VERSION)),
        Err(LoadError::Corrupt(_))
    ));
}

#[test]
fn foreign_versions_are_rejected_not_guessed_at() {
    // The legacy whole-markup snapshot had no per-cell records.
    let legacy = r#"{"version": 1, "markup": "<tr><td>old</td></tr>"}"#;
    assert!(matches!(decode(legacy), Err(LoadError::UnsupportedVersion(1))));

    let unversioned = r#"{"cells": {}}"#;
    assert!(matches!(decode(unversioned), Err(LoadError::UnsupportedVersion(0))));
}

#[test]
fn cell_keys_round_trip() {
    let a = addr(12, 3);
    assert_eq!(cell_key(a), "cell-12-3");
    assert_eq!(parse_cell_key("cell-12-3"), Some(a));
    assert_eq!(parse_cell_key("cell-12"), None);
    assert_eq!(parse_cell_key("row-12-3"), None);
    assert_eq!(parse_cell_key("cell-x-3"), None);
}

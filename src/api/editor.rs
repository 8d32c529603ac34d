//! Editor lifecycle and cell text operations
//!
//! `initEditor` seeds the module-level state with the default band layout;
//! the shell calls it once on page load, before replaying persisted state.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_state, serialize};
use crate::api::storage::persist;
use crate::models::{CellAddr, EditorState, TableDoc, PALETTE_COLORS};
use crate::{wasm_info, wasm_log};

/// Initialize the editor with the default table layout.
///
/// # Parameters
/// - `cols`: number of columns in the grid
/// - `top_rows`: data rows above the notice row
/// - `bottom_rows`: data rows below the notice row
#[wasm_bindgen(js_name = initEditor)]
pub fn init_editor(cols: usize, top_rows: usize, bottom_rows: usize) -> Result<(), JsValue> {
    if cols == 0 {
        return Err(JsValue::from_str("The table needs at least one column"));
    }
    wasm_info!(
        "initEditor called: cols={}, top_rows={}, bottom_rows={}",
        cols,
        top_rows,
        bottom_rows
    );

    let mut guard = lock_state()?;
    *guard = Some(EditorState::new(TableDoc::with_bands(
        cols,
        top_rows,
        bottom_rows,
    )));
    Ok(())
}

/// Snapshot of the full editor state, for the shell's debugging hooks
#[wasm_bindgen(js_name = getEditorState)]
pub fn get_editor_state() -> Result<JsValue, JsValue> {
    let guard = lock_state()?;
    let state = guard
        .as_ref()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    serialize(state, "Editor state serialization error")
}

/// The fixed swatch palette the shell builds its color picker from
#[wasm_bindgen(js_name = paletteColors)]
pub fn palette_colors() -> js_sys::Array {
    PALETTE_COLORS
        .iter()
        .map(|c| JsValue::from_str(c))
        .collect()
}

/// Update an editable cell's text (forwarded from `contenteditable` input)
/// and persist the change.
#[wasm_bindgen(js_name = setCellText)]
pub fn set_cell_text(row: usize, col: usize, text: &str) -> Result<bool, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let changed = state.doc.set_cell_text(CellAddr { row, col }, text);
    if changed {
        wasm_log!("setCellText: ({}, {}) updated", row, col);
        persist(state);
    } else {
        wasm_log!("setCellText: ({}, {}) is not an editable cell", row, col);
    }
    Ok(changed)
}

//! Resize drag operations
//!
//! The shell owns hit testing (its handle elements) and measurement (the
//! grabbed column/row's rendered size at pointer-down); the module owns the
//! drag state machine, clamping, and uniform propagation, and reports the
//! live pixel readout for the on-screen indicator. Ending a drag persists
//! the new dimensions.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_state, serialize};
use crate::api::storage::persist;
use crate::api::types::ResizeMoveResult;
use crate::{wasm_info, wasm_log};

/// Start a column-width drag from its handle
#[wasm_bindgen(js_name = beginColumnResize)]
pub fn begin_column_resize(col: usize, client_x: f64, start_width: f64) -> Result<bool, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let started = state
        .resize
        .begin_column(&state.doc, col, client_x as f32, start_width as f32);
    wasm_log!(
        "beginColumnResize: col={} start_width={} -> {}",
        col,
        start_width,
        started
    );
    Ok(started)
}

/// Start a row-height drag from its handle
#[wasm_bindgen(js_name = beginRowResize)]
pub fn begin_row_resize(row: usize, client_y: f64, start_height: f64) -> Result<bool, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let started = state
        .resize
        .begin_row(&state.doc, row, client_y as f32, start_height as f32);
    wasm_log!(
        "beginRowResize: row={} start_height={} -> {}",
        row,
        start_height,
        started
    );
    Ok(started)
}

/// Forward a pointer move during a drag. Returns the live readout, or a
/// null readout when no drag is active.
#[wasm_bindgen(js_name = resizeMove)]
pub fn resize_move(client_x: f64, client_y: f64) -> Result<JsValue, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let readout = state
        .resize
        .update(&mut state.doc, client_x as f32, client_y as f32);
    serialize(
        &ResizeMoveResult { readout },
        "Resize readout serialization error",
    )
}

/// End the drag (pointer-up) and persist the new dimensions. Returns true
/// when a drag was actually active.
#[wasm_bindgen(js_name = endResize)]
pub fn end_resize() -> Result<bool, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let was_active = state.resize.finish();
    if was_active {
        wasm_info!("endResize: drag finished, persisting dimensions");
        persist(state);
    }
    Ok(was_active)
}

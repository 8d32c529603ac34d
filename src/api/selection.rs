//! Selection operations
//!
//! The shell forwards table clicks here with the modifier state; the module
//! owns the selection and returns the resulting set so the shell can patch
//! marker classes (or simply re-render).

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_state, serialize};
use crate::api::types::ClickResult;
use crate::models::{CellAddr, ClickModifiers, ClickOutcome};
use crate::wasm_log;

/// Handle a click on a table cell.
///
/// `shift` toggles the cell in the selection; `range` selects the rectangle
/// between the anchor and the clicked cell. Clicks are suppressed while a
/// resize drag is active so the drag release never reselects cells.
#[wasm_bindgen(js_name = clickCell)]
pub fn click_cell(row: usize, col: usize, shift: bool, range: bool) -> Result<JsValue, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let outcome = state.click_cell(CellAddr { row, col }, ClickModifiers { shift, range });
    match outcome {
        ClickOutcome::Selected => {
            wasm_log!(
                "clickCell: ({}, {}) shift={} range={} -> {} selected",
                row,
                col,
                shift,
                range,
                state.selection.len()
            );
        }
        ClickOutcome::Suppressed => wasm_log!("clickCell: suppressed during resize"),
        ClickOutcome::Ignored => wasm_log!("clickCell: ({}, {}) is not selectable", row, col),
    }

    serialize(
        &ClickResult {
            outcome,
            selection: state.selection.addresses().to_vec(),
        },
        "Click result serialization error",
    )
}

/// Clear the selection (click outside the table and settings panel)
#[wasm_bindgen(js_name = clearSelection)]
pub fn clear_selection() -> Result<(), JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    state.selection.clear();
    Ok(())
}

/// The current selection, in click order
#[wasm_bindgen(js_name = getSelection)]
pub fn get_selection() -> Result<JsValue, JsValue> {
    let guard = lock_state()?;
    let state = guard
        .as_ref()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    serialize(
        &state.selection.addresses().to_vec(),
        "Selection serialization error",
    )
}

//! Row add/delete operations
//!
//! Errors come back as user-facing strings: the shell surfaces a refusal
//! (e.g. deleting a band's last row) as a blocking notification. Successful
//! changes persist before returning; records for removed rows disappear
//! with that save because the schema is re-derived from the model.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{band_from_str, lock_state, serialize};
use crate::api::storage::persist;
use crate::api::types::RowChange;
use crate::wasm_info;

/// Add a row to the named data band ("top" or "bottom")
#[wasm_bindgen(js_name = addRow)]
pub fn add_row(band: &str) -> Result<JsValue, JsValue> {
    let band = band_from_str(band)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown table band '{}'", band)))?;

    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let index = state
        .doc
        .add_row(band)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let rows_in_band = state.doc.rows_in_band(band).len();
    wasm_info!("addRow: inserted row {} ({} now in band)", index, rows_in_band);
    persist(state);

    serialize(
        &RowChange {
            index,
            rows_in_band,
        },
        "Row change serialization error",
    )
}

/// Delete the last row of the named data band ("top" or "bottom")
#[wasm_bindgen(js_name = deleteRow)]
pub fn delete_row(band: &str) -> Result<JsValue, JsValue> {
    let band = band_from_str(band)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown table band '{}'", band)))?;

    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let index = state
        .doc
        .delete_row(band)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let rows_in_band = state.doc.rows_in_band(band).len();
    wasm_info!("deleteRow: removed row {} ({} left in band)", index, rows_in_band);
    persist(state);

    serialize(
        &RowChange {
            index,
            rows_in_band,
        },
        "Row change serialization error",
    )
}

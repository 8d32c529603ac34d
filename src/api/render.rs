//! Rendering the model into the page
//!
//! `renderTable` hands the shell the `<tbody>` markup; `syncDom` patches it
//! straight into the capture area when a document is available. The DOM is
//! always written from the model, never read back.

use wasm_bindgen::prelude::*;

use crate::api::helpers::lock_state;
use crate::render::render_table_html;
use crate::wasm_warn;

/// CSS selector for the table body inside the capture area
const TABLE_BODY_SELECTOR: &str = "#capture-area .data-table tbody";

/// Render the `<tbody>` inner markup for the current table state
#[wasm_bindgen(js_name = renderTable)]
pub fn render_table() -> Result<String, JsValue> {
    let guard = lock_state()?;
    let state = guard
        .as_ref()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    Ok(render_table_html(&state.doc, &state.selection))
}

/// Patch the rendered markup into the page. Returns false (without failing)
/// when the capture area is not present, e.g. in a headless host.
#[wasm_bindgen(js_name = syncDom)]
pub fn sync_dom() -> Result<bool, JsValue> {
    let html = render_table()?;

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => {
            wasm_warn!("syncDom: no document available");
            return Ok(false);
        }
    };
    let tbody = match document.query_selector(TABLE_BODY_SELECTOR) {
        Ok(Some(tbody)) => tbody,
        _ => {
            wasm_warn!("syncDom: '{}' not found", TABLE_BODY_SELECTOR);
            return Ok(false);
        }
    };
    tbody.set_inner_html(&html);
    Ok(true)
}

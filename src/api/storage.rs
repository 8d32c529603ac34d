//! Local-storage persistence
//!
//! Saving runs after every mutating action (the page's save-after-every-
//! action contract); loading replays the persisted record on page load.
//! Corrupt state is not fatal: the key is cleared and the shell gets a
//! structured result telling it to notify the user.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_state, serialize};
use crate::api::types::LoadResult;
use crate::models::EditorState;
use crate::storage::{decode, encode, restore, snapshot, LoadError, STORAGE_KEY};
use crate::{wasm_error, wasm_info, wasm_warn};

/// Local storage, when the environment provides one
fn local_storage() -> Result<web_sys::Storage, LoadError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(LoadError::Unavailable)
}

/// Best-effort save used after every mutating action. Failures are logged
/// and swallowed: a missing storage area disables persistence, it does not
/// break editing.
pub(crate) fn persist(state: &EditorState) {
    let persisted = snapshot(&state.doc, state.color_target, state.last_color_input.clone());
    let encoded = match encode(&persisted) {
        Ok(encoded) => encoded,
        Err(e) => {
            wasm_error!("Failed to encode table state: {}", e);
            return;
        }
    };
    match local_storage() {
        Ok(storage) => {
            if storage.set_item(STORAGE_KEY, &encoded).is_err() {
                wasm_warn!("Local storage rejected the table state (quota?)");
            }
        }
        Err(_) => wasm_warn!("Local storage unavailable; table state not saved"),
    }
}

/// Save the current table state to local storage
#[wasm_bindgen(js_name = saveState)]
pub fn save_state() -> Result<(), JsValue> {
    let guard = lock_state()?;
    let state = guard
        .as_ref()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let persisted = snapshot(&state.doc, state.color_target, state.last_color_input.clone());
    let encoded = encode(&persisted).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let storage = local_storage().map_err(|e| JsValue::from_str(&e.to_string()))?;
    storage
        .set_item(STORAGE_KEY, &encoded)
        .map_err(|_| JsValue::from_str("Local storage rejected the table state"))?;
    wasm_info!("saveState: {} bytes written", encoded.len());
    Ok(())
}

/// Restore persisted table state, replacing the current document.
///
/// Returns `{status: "restored" | "empty" | "corrupt", reason?}`. A corrupt
/// record also clears the persisted key so the next load starts clean; the
/// shell is expected to notify the user and re-render either way.
#[wasm_bindgen(js_name = loadState)]
pub fn load_state() -> Result<JsValue, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let storage = match local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            wasm_warn!("loadState: local storage unavailable");
            return serialize(
                &LoadResult {
                    status: "empty".to_string(),
                    reason: None,
                },
                "Load result serialization error",
            );
        }
    };

    let raw = match storage.get_item(STORAGE_KEY).ok().flatten() {
        Some(raw) => raw,
        None => {
            wasm_info!("loadState: nothing persisted");
            return serialize(
                &LoadResult {
                    status: "empty".to_string(),
                    reason: None,
                },
                "Load result serialization error",
            );
        }
    };

    match decode(&raw) {
        Ok(persisted) => {
            state.doc = restore(&persisted);
            state.color_target = persisted.color_target;
            state.last_color_input = persisted.last_color_input.clone();
            state.selection.clear();
            wasm_info!(
                "loadState: restored {} rows, {} cell records",
                state.doc.rows.len(),
                persisted.cells.len()
            );
            serialize(
                &LoadResult {
                    status: "restored".to_string(),
                    reason: None,
                },
                "Load result serialization error",
            )
        }
        Err(e) => {
            wasm_error!("loadState: {}", e);
            // Clear every persisted key so a reload starts from the default
            // table instead of failing the same way again.
            let _ = storage.remove_item(STORAGE_KEY);
            serialize(
                &LoadResult {
                    status: "corrupt".to_string(),
                    reason: Some(e.to_string()),
                },
                "Load result serialization error",
            )
        }
    }
}

/// Drop all persisted table state
#[wasm_bindgen(js_name = clearState)]
pub fn clear_state() -> Result<(), JsValue> {
    let storage = local_storage().map_err(|e| JsValue::from_str(&e.to_string()))?;
    storage
        .remove_item(STORAGE_KEY)
        .map_err(|_| JsValue::from_str("Failed to clear persisted table state"))?;
    wasm_info!("clearState: persisted state removed");
    Ok(())
}

//! Style operations: palette colors, font sizes, theme, and title
//!
//! Color and font-size application go to the current selection; an empty
//! selection comes back as a structured result with a user-facing reason so
//! the shell decides whether to prompt. Every successful mutation persists
//! before returning.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{lock_state, serialize};
use crate::api::storage::persist;
use crate::api::types::ApplyResult;
use crate::models::style::{apply_color, apply_font_size};
use crate::models::{ColorTarget, StyleError, ThemeRole};
use crate::{wasm_info, wasm_log};

/// Choose whether palette colors hit text or background
#[wasm_bindgen(js_name = setColorTarget)]
pub fn set_color_target(target: &str) -> Result<(), JsValue> {
    let target = ColorTarget::parse(target)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown color target '{}'", target)))?;

    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    state.color_target = target;
    persist(state);
    Ok(())
}

/// Apply a palette color to every selected cell as the chosen target.
///
/// Background application also derives a contrasting text color so dark
/// fills stay readable.
#[wasm_bindgen(js_name = applyColor)]
pub fn apply_palette_color(color: &str) -> Result<JsValue, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let target = state.color_target;
    let result = match apply_color(&mut state.doc, &state.selection, color, target, true) {
        Ok(applied) => {
            wasm_info!("applyColor: {} applied to {} cells as {:?}", color, applied, target);
            persist(state);
            ApplyResult {
                applied,
                reason: None,
            }
        }
        Err(e @ StyleError::NoSelection) => {
            wasm_log!("applyColor: nothing selected");
            ApplyResult {
                applied: 0,
                reason: Some(e.to_string()),
            }
        }
        Err(e) => return Err(JsValue::from_str(&e.to_string())),
    };
    serialize(&result, "Apply result serialization error")
}

/// Apply a font size (in pixels) to every selected cell.
///
/// Sizes outside the accepted bounds are rejected with a user-facing reason
/// and no cell is mutated.
#[wasm_bindgen(js_name = applyFontSize)]
pub fn apply_font_size_px(px: f64) -> Result<JsValue, JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;

    let result = match apply_font_size(&mut state.doc, &state.selection, px as f32) {
        Ok(applied) => {
            wasm_info!("applyFontSize: {}px applied to {} cells", px, applied);
            persist(state);
            ApplyResult {
                applied,
                reason: None,
            }
        }
        Err(e @ (StyleError::NoSelection | StyleError::FontSizeOutOfRange { .. })) => {
            wasm_log!("applyFontSize rejected: {}", e);
            ApplyResult {
                applied: 0,
                reason: Some(e.to_string()),
            }
        }
    };
    serialize(&result, "Apply result serialization error")
}

/// Set one theme color slot from the settings panel
#[wasm_bindgen(js_name = setThemeColor)]
pub fn set_theme_color(role: &str, color: &str) -> Result<(), JsValue> {
    let role = ThemeRole::parse(role)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown theme color '{}'", role)))?;

    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    state.doc.theme.set(role, color);
    persist(state);
    Ok(())
}

/// Set the custom title shown in the notice row
#[wasm_bindgen(js_name = setTitle)]
pub fn set_title(text: &str) -> Result<(), JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    state.doc.title = if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    };
    persist(state);
    Ok(())
}

/// Remember which settings color input had focus last, so the shell can
/// restore it after a reload
#[wasm_bindgen(js_name = setLastColorInput)]
pub fn set_last_color_input(id: &str) -> Result<(), JsValue> {
    let mut guard = lock_state()?;
    let state = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("No editor initialized"))?;
    state.last_color_input = if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    };
    persist(state);
    Ok(())
}

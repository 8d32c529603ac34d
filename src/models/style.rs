//! Cell styling: colors, font sizes, and the global theme
//!
//! Style application always goes through the selection model so the view
//! only ever reflects explicit state. Background application can derive a
//! contrasting text color from the ITU-R BT.709 relative luminance of the
//! applied color, matching the page's palette behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use super::core::TableDoc;
use super::selection::SelectionModel;

/// Inclusive lower bound for cell font sizes, in pixels
pub const FONT_SIZE_MIN_PX: f32 = 8.0;

/// Inclusive upper bound for cell font sizes, in pixels
pub const FONT_SIZE_MAX_PX: f32 = 48.0;

/// Fixed line-height paired with every custom font size
pub const FONT_LINE_HEIGHT: &str = "1.2";

/// The fixed swatch palette the shell builds its picker from
pub const PALETTE_COLORS: [&str; 40] = [
    "#FF0000", "#FF4500", "#FFA500", "#FFFF00", "#ADFF2F", "#00FF00", "#3CB371", "#00FFFF",
    "#1E90FF", "#0000FF", "#8A2BE2", "#9400D3", "#FF00FF", "#FF69B4", "#FFC0CB", "#FFFFFF",
    "#CCCCCC", "#999999", "#666666", "#333333", "#000000",
    "#800000", "#8B4513", "#D2B48C", "#F5DEB3", "#9ACD32", "#556B2F", "#008080", "#4682B4",
    "#4169E1", "#800080", "#DDA0DD", "#F08080", "#2F4F4F", "#A9A9A9", "#778899", "#C0C0C0",
    "#228B22", "#CD5C5C", "#6A5ACD",
];

/// Which aspect of a cell a picked color applies to
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    /// Apply to the cell text color
    Text = 0,

    /// Apply to the cell background color
    Background = 1,
}

impl Default for ColorTarget {
    fn default() -> Self {
        ColorTarget::Text
    }
}

impl ColorTarget {
    /// Parse the value of the `colorTarget` radio group
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(ColorTarget::Text),
            "background" => Some(ColorTarget::Background),
            _ => None,
        }
    }
}

/// Custom appearance of a single cell (unset fields inherit page defaults)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    /// Text color (CSS color string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Background color (CSS color string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Font size in pixels
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size_px: Option<f32>,
}

impl CellStyle {
    /// Whether every field is unset
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background_color.is_none() && self.font_size_px.is_none()
    }
}

/// Global theme colors driven by the settings panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_background: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_background: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_number_text: Option<String>,
}

/// Theme color slot addressed by the settings panel inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeRole {
    HeaderBackground,
    HeaderText,
    RowBackground,
    RowText,
    ColumnNumberText,
}

impl ThemeRole {
    /// Parse a settings-panel input identifier
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "header-background" => Some(ThemeRole::HeaderBackground),
            "header-text" => Some(ThemeRole::HeaderText),
            "row-background" => Some(ThemeRole::RowBackground),
            "row-text" => Some(ThemeRole::RowText),
            "column-number-text" => Some(ThemeRole::ColumnNumberText),
            _ => None,
        }
    }
}

impl ThemeColors {
    /// Set one theme slot to the given color
    pub fn set(&mut self, role: ThemeRole, color: &str) {
        let slot = match role {
            ThemeRole::HeaderBackground => &mut self.header_background,
            ThemeRole::HeaderText => &mut self.header_text,
            ThemeRole::RowBackground => &mut self.row_background,
            ThemeRole::RowText => &mut self.row_text,
            ThemeRole::ColumnNumberText => &mut self.column_number_text,
        };
        *slot = Some(color.to_string());
    }
}

/// Errors from style application
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    /// Nothing is selected; the shell decides whether to prompt
    #[error("select at least one cell first")]
    NoSelection,

    /// Font size outside the accepted bounds; no cell was mutated
    #[error("font size must be between {min} and {max} pixels (got {got})")]
    FontSizeOutOfRange { got: f32, min: f32, max: f32 },
}

/// Apply a color to every selected cell as the chosen target.
///
/// With `ColorTarget::Background` and `auto_contrast`, the text color is set
/// to white on dark backgrounds and black on light ones so the cell stays
/// readable. Returns the number of cells changed.
pub fn apply_color(
    doc: &mut TableDoc,
    selection: &SelectionModel,
    color: &str,
    target: ColorTarget,
    auto_contrast: bool,
) -> Result<usize, StyleError> {
    if selection.is_empty() {
        return Err(StyleError::NoSelection);
    }

    let mut applied = 0;
    for addr in selection.addresses() {
        if let Some(cell) = doc.cell_mut(*addr) {
            match target {
                ColorTarget::Text => {
                    cell.style.color = Some(color.to_string());
                }
                ColorTarget::Background => {
                    cell.style.background_color = Some(color.to_string());
                    if auto_contrast {
                        cell.style.color = Some(contrast_text_color(color).to_string());
                    }
                }
            }
            applied += 1;
        }
    }
    Ok(applied)
}

/// Apply a font size (paired with the fixed line-height at render time) to
/// every selected cell. Out-of-range sizes are rejected with no mutation.
pub fn apply_font_size(
    doc: &mut TableDoc,
    selection: &SelectionModel,
    px: f32,
) -> Result<usize, StyleError> {
    if selection.is_empty() {
        return Err(StyleError::NoSelection);
    }
    if !(FONT_SIZE_MIN_PX..=FONT_SIZE_MAX_PX).contains(&px) {
        return Err(StyleError::FontSizeOutOfRange {
            got: px,
            min: FONT_SIZE_MIN_PX,
            max: FONT_SIZE_MAX_PX,
        });
    }

    let mut applied = 0;
    for addr in selection.addresses() {
        if let Some(cell) = doc.cell_mut(*addr) {
            cell.style.font_size_px = Some(px);
            applied += 1;
        }
    }
    Ok(applied)
}

/// Relative luminance (ITU-R BT.709) of a `#RRGGBB` color, in 0.0..=1.0.
/// Returns None for anything that is not a six-digit hex color.
pub fn relative_luminance(color: &str) -> Option<f32> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32;
    Some((0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0)
}

/// Whether a color reads as dark. Unparseable colors count as light, the
/// same as the page treats `transparent`.
pub fn is_dark(color: &str) -> bool {
    matches!(relative_luminance(color), Some(l) if l < 0.5)
}

/// Contrasting text color for the given background
pub fn contrast_text_color(background: &str) -> &'static str {
    if is_dark(background) {
        "white"
    } else {
        "black"
    }
}

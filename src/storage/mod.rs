//! Persistence schema and codec
//!
//! One versioned JSON schema, stored under a single local-storage key. Cell
//! appearance is persisted as a sparse map of per-position records
//! (`cell-{row}-{col}`), which survives structural edits such as row
//! add/delete; the legacy whole-markup snapshot strategy is recognized only
//! to be reported as an unsupported version so the caller can clear storage
//! and tell the user. Loading returns a typed error instead of throwing —
//! the API layer decides on recovery.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BandKind, Cell, CellAddr, CellStyle, ColorTarget, Row, TableDoc, ThemeColors};

/// Local-storage key the whole persisted state lives under
pub const STORAGE_KEY: &str = "table-editor.state";

/// Current schema version; v1 was the whole-markup snapshot
pub const SCHEMA_VERSION: u32 = 2;

/// Persisted appearance and text of one cell, keyed by `cell-{row}-{col}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub font_size_px: Option<f32>,
}

/// The complete persisted settings record (schema v2)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Schema version; always [`SCHEMA_VERSION`] when written by this module
    pub version: u32,

    /// Band layout of every row, in display order
    pub row_bands: Vec<BandKind>,

    /// Sparse per-cell records keyed by `cell-{row}-{col}`
    pub cells: BTreeMap<String, CellRecord>,

    /// Custom column widths (None = automatic); length is the column count
    pub column_widths: Vec<Option<f32>>,

    /// Custom row heights keyed by row index
    pub row_heights: BTreeMap<usize, f32>,

    /// Chosen color target (text vs background)
    pub color_target: ColorTarget,

    /// Global theme colors
    pub theme: ThemeColors,

    /// Custom title shown in the notice row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Identifier of the last-focused settings color input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_color_input: Option<String>,
}

/// Errors from loading persisted state
#[derive(Debug, Error)]
pub enum LoadError {
    /// The stored value is not valid JSON for the schema
    #[error("persisted table state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A different schema version (e.g. the legacy markup snapshot) was found
    #[error("persisted table state has unsupported version {0}")]
    UnsupportedVersion(u32),

    /// Local storage is disabled or unreachable
    #[error("local storage is unavailable")]
    Unavailable,
}

/// Storage key for one cell position
pub fn cell_key(addr: CellAddr) -> String {
    format!("cell-{}-{}", addr.row, addr.col)
}

/// Parse a `cell-{row}-{col}` storage key back into an address
pub fn parse_cell_key(key: &str) -> Option<CellAddr> {
    let rest = key.strip_prefix("cell-")?;
    let (row, col) = rest.split_once('-')?;
    Some(CellAddr {
        row: row.parse().ok()?,
        col: col.parse().ok()?,
    })
}

/// Derive the persisted record from the live document. Only cells carrying
/// text or custom style get a record; fixed chrome (column numbers, the
/// notice cell) is regenerated on restore and never stored.
pub fn snapshot(
    doc: &TableDoc,
    color_target: ColorTarget,
    last_color_input: Option<String>,
) -> PersistedState {
    let mut cells = BTreeMap::new();
    let mut row_heights = BTreeMap::new();

    for (row_idx, row) in doc.rows.iter().enumerate() {
        if let Some(height) = row.height_px {
            row_heights.insert(row_idx, height);
        }
        for (col_idx, cell) in row.cells.iter().enumerate() {
            if !cell.editable || !cell.has_content() {
                continue;
            }
            let record = CellRecord {
                text: (!cell.text.is_empty()).then(|| cell.text.clone()),
                color: cell.style.color.clone(),
                background_color: cell.style.background_color.clone(),
                font_size_px: cell.style.font_size_px,
            };
            cells.insert(
                cell_key(CellAddr {
                    row: row_idx,
                    col: col_idx,
                }),
                record,
            );
        }
    }

    PersistedState {
        version: SCHEMA_VERSION,
        row_bands: doc.rows.iter().map(|r| r.band).collect(),
        cells,
        column_widths: doc.column_widths.clone(),
        row_heights,
        color_target,
        theme: doc.theme.clone(),
        title: doc.title.clone(),
        last_color_input,
    }
}

/// Serialize the persisted state to the stored JSON form
pub fn encode(state: &PersistedState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Parse stored JSON back into a [`PersistedState`].
///
/// The version field is checked before the full shape so a v1 markup blob
/// (or anything else unrecognized) reports [`LoadError::UnsupportedVersion`]
/// rather than a parse failure deep inside the struct.
pub fn decode(raw: &str) -> Result<PersistedState, LoadError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let version = value
        .get("version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;
    if version != SCHEMA_VERSION {
        return Err(LoadError::UnsupportedVersion(version));
    }
    Ok(serde_json::from_value(value)?)
}

/// Rebuild a document from persisted state: the recorded band layout is
/// reconstructed first, then per-cell records, widths, heights, theme, and
/// title are replayed onto it.
pub fn restore(state: &PersistedState) -> TableDoc {
    let cols = state.column_widths.len();

    let mut rows = Vec::with_capacity(state.row_bands.len());
    for band in &state.row_bands {
        let row = match band {
            BandKind::ColumnNumbers => Row {
                band: BandKind::ColumnNumbers,
                height_px: None,
                cells: (1..=cols).map(|n| Cell::fixed(n.to_string())).collect(),
            },
            BandKind::MiddleNotice => Row::notice(),
            band => Row::editable(*band, cols),
        };
        rows.push(row);
    }

    let mut doc = TableDoc {
        rows,
        column_widths: state.column_widths.clone(),
        theme: state.theme.clone(),
        title: state.title.clone(),
    };

    for (row_idx, height) in &state.row_heights {
        doc.set_row_height(*row_idx, *height);
    }

    for (key, record) in &state.cells {
        let Some(addr) = parse_cell_key(key) else {
            continue;
        };
        let Some(cell) = doc.cell_mut(addr) else {
            continue;
        };
        if let Some(text) = &record.text {
            cell.text = text.clone();
        }
        cell.style = CellStyle {
            color: record.color.clone(),
            background_color: record.background_color.clone(),
            font_size_px: record.font_size_px,
        };
    }

    doc
}

//! Shared result types for the WASM API
//!
//! Structured records returned to JavaScript so the shell can react without
//! parsing error strings.

use serde::{Deserialize, Serialize};

use crate::models::{CellAddr, ClickOutcome, ResizeReadout};

/// Result of routing a cell click
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClickResult {
    /// What the click did (selected / suppressed by resize / ignored)
    pub outcome: ClickOutcome,

    /// The selection after the click, in click order
    pub selection: Vec<CellAddr>,
}

/// Result of a style application (color or font size)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApplyResult {
    /// Number of cells changed
    pub applied: usize,

    /// User-facing reason when nothing was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of a row add/delete
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RowChange {
    /// Row index that was inserted or removed
    pub index: usize,

    /// Rows remaining in the band after the change
    pub rows_in_band: usize,
}

/// Result of restoring persisted state
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoadResult {
    /// "restored", "empty", or "corrupt"
    pub status: String,

    /// User-facing reason for a corrupt outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Live readout forwarded during a resize drag, or null once idle
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResizeMoveResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readout: Option<ResizeReadout>,
}

//! Core data structures for the table editor
//!
//! This module defines the cell-grid architecture the module operates on:
//! cells addressed by (row, col), rows grouped into semantic bands, and the
//! document aggregate that owns column widths, theme colors, and the title.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub use super::style::{CellStyle, ThemeColors};

/// Position of a cell in the grid (0-based row and column)
#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellAddr {
    /// Row index within the table (0-based, counts every band)
    pub row: usize,

    /// Column index within the row (0-based)
    pub col: usize,
}

#[wasm_bindgen]
impl CellAddr {
    /// Create a new cell address
    #[wasm_bindgen(constructor)]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Semantic row bands of the table
///
/// The grid is a fixed sandwich: column numbers, a header row, the top data
/// band, a full-width notice row carrying the custom title, and the bottom
/// data band. Only the two data bands can grow or shrink.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BandKind {
    /// Fixed row of column numbers (1..=N)
    ColumnNumbers = 0,

    /// Header row with user-editable column labels
    Header = 1,

    /// Data rows above the notice row
    Top = 2,

    /// Full-width notice/title row separating the data bands
    MiddleNotice = 3,

    /// Data rows below the notice row
    Bottom = 4,
}

impl BandKind {
    /// Whether rows can be added to / removed from this band
    pub fn is_mutable(&self) -> bool {
        matches!(self, BandKind::Top | BandKind::Bottom)
    }
}

/// One table cell: editable text plus its custom appearance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Cell {
    /// Text content of the cell
    pub text: String,

    /// Custom appearance (unset fields inherit the page defaults)
    pub style: CellStyle,

    /// Whether the cell accepts text edits and selection clicks
    pub editable: bool,
}

impl Cell {
    /// Create an empty editable cell
    pub fn editable() -> Self {
        Self {
            text: String::new(),
            style: CellStyle::default(),
            editable: true,
        }
    }

    /// Create a fixed (non-editable) cell with the given text
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CellStyle::default(),
            editable: false,
        }
    }

    /// Clear text and custom styling, keeping editability
    pub fn reset(&mut self) {
        self.text.clear();
        self.style = CellStyle::default();
    }

    /// Whether the cell carries anything worth persisting
    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || !self.style.is_empty()
    }
}

/// An ordered sequence of cells sharing a band and a height
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Row {
    /// Band this row belongs to
    pub band: BandKind,

    /// Custom row height in pixels (None = automatic)
    pub height_px: Option<f32>,

    /// Cells of this row; notice rows hold a single full-width cell
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a row of `cols` empty editable cells in the given band
    pub fn editable(band: BandKind, cols: usize) -> Self {
        Self {
            band,
            height_px: None,
            cells: (0..cols).map(|_| Cell::editable()).collect(),
        }
    }

    /// Create the full-width notice row
    pub fn notice() -> Self {
        Self {
            band: BandKind::MiddleNotice,
            height_px: None,
            cells: vec![Cell::fixed("")],
        }
    }

    /// Whether this row spans the full table width with a single cell
    pub fn is_notice(&self) -> bool {
        self.band == BandKind::MiddleNotice
    }
}

/// The table document: the WASM-owned source of truth the view renders from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableDoc {
    /// Rows in display order, every band included
    pub rows: Vec<Row>,

    /// Custom column widths in pixels, indexed by column (None = automatic)
    pub column_widths: Vec<Option<f32>>,

    /// Global theme colors from the settings panel
    pub theme: ThemeColors,

    /// Custom title shown in the notice row
    pub title: Option<String>,
}

impl TableDoc {
    /// Create the default sandwich layout: column numbers, header,
    /// `top_rows` top data rows, the notice row, `bottom_rows` bottom rows.
    pub fn with_bands(cols: usize, top_rows: usize, bottom_rows: usize) -> Self {
        let mut rows = Vec::with_capacity(top_rows + bottom_rows + 3);

        let numbers = Row {
            band: BandKind::ColumnNumbers,
            height_px: None,
            cells: (1..=cols).map(|n| Cell::fixed(n.to_string())).collect(),
        };
        rows.push(numbers);
        rows.push(Row::editable(BandKind::Header, cols));
        for _ in 0..top_rows {
            rows.push(Row::editable(BandKind::Top, cols));
        }
        rows.push(Row::notice());
        for _ in 0..bottom_rows {
            rows.push(Row::editable(BandKind::Bottom, cols));
        }

        Self {
            rows,
            column_widths: vec![None; cols],
            theme: ThemeColors::default(),
            title: None,
        }
    }

    /// Number of columns in the grid
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Look up a cell by address
    pub fn cell(&self, addr: CellAddr) -> Option<&Cell> {
        self.rows.get(addr.row)?.cells.get(addr.col)
    }

    /// Look up a cell mutably by address
    pub fn cell_mut(&mut self, addr: CellAddr) -> Option<&mut Cell> {
        self.rows.get_mut(addr.row)?.cells.get_mut(addr.col)
    }

    /// Set the text of an editable cell; returns false if the address is
    /// out of range or the cell is fixed
    pub fn set_cell_text(&mut self, addr: CellAddr, text: &str) -> bool {
        match self.cell_mut(addr) {
            Some(cell) if cell.editable => {
                cell.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Band of the given row, if it exists
    pub fn band_of_row(&self, row: usize) -> Option<BandKind> {
        self.rows.get(row).map(|r| r.band)
    }

    /// Indices of all rows in the given band, in display order
    pub fn rows_in_band(&self, band: BandKind) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.band == band)
            .map(|(i, _)| i)
            .collect()
    }

    /// Set a custom width for a column; returns false when out of range
    pub fn set_column_width(&mut self, col: usize, width_px: f32) -> bool {
        match self.column_widths.get_mut(col) {
            Some(slot) => {
                *slot = Some(width_px);
                true
            }
            None => false,
        }
    }

    /// Set a custom height for a row; returns false when out of range
    pub fn set_row_height(&mut self, row: usize, height_px: f32) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.height_px = Some(height_px);
                true
            }
            None => false,
        }
    }
}

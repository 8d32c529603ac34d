//! Selection tracking
//!
//! The selection model is the source of truth for which cells are targeted
//! by style operations; the renderer derives the `selected` marker class
//! from it. It supports plain single-select, shift-toggle multi-select, and
//! the rectangular range-select variant, all driven by one click entry
//! point with an explicit modifier record.

use serde::{Deserialize, Serialize};

use super::core::{CellAddr, TableDoc};

/// Modifier keys held during a cell click
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ClickModifiers {
    /// Shift held: toggle the clicked cell in and out of the selection
    pub shift: bool,

    /// Range modifier held: select the rectangle between anchor and click
    pub range: bool,
}

impl ClickModifiers {
    /// No modifiers: plain single-select click
    pub fn plain() -> Self {
        Self::default()
    }

    /// Shift-toggle click
    pub fn shift() -> Self {
        Self {
            shift: true,
            range: false,
        }
    }

    /// Rectangular range click
    pub fn range() -> Self {
        Self {
            shift: false,
            range: true,
        }
    }
}

/// Ordered set of selected cells plus the range anchor
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SelectionModel {
    cells: Vec<CellAddr>,
    anchor: Option<CellAddr>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on a cell. Returns true when the selection changed.
    ///
    /// Plain clicks collapse the selection to the clicked cell; shift
    /// toggles membership; the range modifier selects the editable cells in
    /// the rectangle spanned by the anchor and the clicked cell. Clicks on
    /// fixed cells or out-of-range addresses are ignored.
    pub fn click(&mut self, doc: &TableDoc, addr: CellAddr, modifiers: ClickModifiers) -> bool {
        let selectable = doc.cell(addr).map(|c| c.editable).unwrap_or(false);
        if !selectable {
            return false;
        }

        if modifiers.range {
            if let Some(anchor) = self.anchor {
                self.select_rectangle(doc, anchor, addr);
                return true;
            }
            // No anchor yet: a range click degrades to a plain click.
        }

        if modifiers.shift && !modifiers.range {
            self.toggle(addr);
            return true;
        }

        self.cells = vec![addr];
        self.anchor = Some(addr);
        true
    }

    /// Toggle one cell's membership without touching the rest
    fn toggle(&mut self, addr: CellAddr) {
        if let Some(pos) = self.cells.iter().position(|a| *a == addr) {
            self.cells.remove(pos);
        } else {
            self.cells.push(addr);
        }
        self.anchor = self.cells.first().copied();
    }

    /// Replace the selection with the editable cells inside the bounding
    /// box of `anchor` and `addr`, in row-major order
    fn select_rectangle(&mut self, doc: &TableDoc, anchor: CellAddr, addr: CellAddr) {
        let (row_lo, row_hi) = (anchor.row.min(addr.row), anchor.row.max(addr.row));
        let (col_lo, col_hi) = (anchor.col.min(addr.col), anchor.col.max(addr.col));

        self.cells.clear();
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                let candidate = CellAddr { row, col };
                if doc.cell(candidate).map(|c| c.editable).unwrap_or(false) {
                    self.cells.push(candidate);
                }
            }
        }
        self.anchor = Some(anchor);
    }

    /// Clear the selection (click outside the table / settings panel)
    pub fn clear(&mut self) {
        self.cells.clear();
        self.anchor = None;
    }

    pub fn contains(&self, addr: CellAddr) -> bool {
        self.cells.contains(&addr)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Selected addresses in click order
    pub fn addresses(&self) -> &[CellAddr] {
        &self.cells
    }

    /// The range anchor (first-selected cell), if any
    pub fn anchor(&self) -> Option<CellAddr> {
        self.anchor
    }
}

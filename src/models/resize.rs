//! Drag-based column and row resizing
//!
//! A three-state machine (idle, resizing a column, resizing a row). The
//! shell measures the grabbed column/row when the drag starts and forwards
//! pointer coordinates; the controller applies the clamped delta to the
//! document so the whole column or row resizes uniformly, and reports a
//! live pixel readout for the on-screen indicator.

use serde::{Deserialize, Serialize};

use super::core::TableDoc;

/// Minimum column width a drag can reach, in pixels
pub const MIN_COLUMN_WIDTH_PX: f32 = 30.0;

/// Minimum row height a drag can reach, in pixels
pub const MIN_ROW_HEIGHT_PX: f32 = 20.0;

/// Axis of an active resize drag
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAxis {
    Column,
    Row,
}

/// Live pixel readout for the current drag position
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ResizeReadout {
    pub axis: ResizeAxis,

    /// Current clamped dimension in pixels
    pub pixels: f32,
}

/// Transient drag state; exists only between pointer-down and pointer-up
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase", tag = "state")]
enum ResizeState {
    #[default]
    Idle,
    Column {
        col: usize,
        start_x: f32,
        start_width: f32,
    },
    Row {
        row: usize,
        start_y: f32,
        start_height: f32,
    },
}

/// State machine driving drag resize
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ResizeController {
    state: ResizeState,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress. The selection path consults this so a
    /// drag release over a cell is never misread as a selection click.
    pub fn is_active(&self) -> bool {
        self.state != ResizeState::Idle
    }

    /// Start a column drag. `start_width` is the column's rendered width as
    /// measured by the shell. Refused while another drag is active or for
    /// columns outside the grid.
    pub fn begin_column(
        &mut self,
        doc: &TableDoc,
        col: usize,
        client_x: f32,
        start_width: f32,
    ) -> bool {
        if self.is_active() || col >= doc.column_count() {
            return false;
        }
        self.state = ResizeState::Column {
            col,
            start_x: client_x,
            start_width,
        };
        true
    }

    /// Start a row drag. Refused while another drag is active, for rows
    /// outside the table, and for the notice row (it carries no handle).
    pub fn begin_row(
        &mut self,
        doc: &TableDoc,
        row: usize,
        client_y: f32,
        start_height: f32,
    ) -> bool {
        if self.is_active() {
            return false;
        }
        let resizable = doc.rows.get(row).map(|r| !r.is_notice()).unwrap_or(false);
        if !resizable {
            return false;
        }
        self.state = ResizeState::Row {
            row,
            start_y: client_y,
            start_height,
        };
        true
    }

    /// Apply the pointer position to the grabbed dimension, clamped to the
    /// axis minimum, and return the live readout. No-op while idle.
    pub fn update(
        &mut self,
        doc: &mut TableDoc,
        client_x: f32,
        client_y: f32,
    ) -> Option<ResizeReadout> {
        match self.state {
            ResizeState::Idle => None,
            ResizeState::Column {
                col,
                start_x,
                start_width,
            } => {
                let width = (start_width + (client_x - start_x)).max(MIN_COLUMN_WIDTH_PX);
                doc.set_column_width(col, width);
                Some(ResizeReadout {
                    axis: ResizeAxis::Column,
                    pixels: width,
                })
            }
            ResizeState::Row {
                row,
                start_y,
                start_height,
            } => {
                let height = (start_height + (client_y - start_y)).max(MIN_ROW_HEIGHT_PX);
                doc.set_row_height(row, height);
                Some(ResizeReadout {
                    axis: ResizeAxis::Row,
                    pixels: height,
                })
            }
        }
    }

    /// End the drag. Returns true when a drag was actually active, which is
    /// the caller's cue to persist the new dimensions.
    pub fn finish(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = ResizeState::Idle;
        was_active
    }
}

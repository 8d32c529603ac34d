//! Models module for the table editor
//!
//! This module contains all the data models and structures
//! used in the cell-grid table system.

pub mod core;
pub mod editor_state;
pub mod resize;
pub mod rows;
pub mod selection;
pub mod style;

// Re-export commonly used types
pub use self::core::{BandKind, Cell, CellAddr, Row, TableDoc};
pub use self::editor_state::{ClickOutcome, EditorState};
pub use self::resize::{
    ResizeAxis, ResizeController, ResizeReadout, MIN_COLUMN_WIDTH_PX, MIN_ROW_HEIGHT_PX,
};
pub use self::rows::RowMutationError;
pub use self::selection::{ClickModifiers, SelectionModel};
pub use self::style::{
    CellStyle, ColorTarget, StyleError, ThemeColors, ThemeRole, FONT_LINE_HEIGHT,
    FONT_SIZE_MAX_PX, FONT_SIZE_MIN_PX, PALETTE_COLORS,
};

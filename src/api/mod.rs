//! Table Editor WASM API
//!
//! This module provides the JavaScript-facing API for the table editor.
//! It includes shared utilities for serialization, validation, and error
//! handling, as well as the core API functions organized by functional
//! domain.
//!
//! # Module Structure
//!
//! - `helpers`: shared utilities, logging macros, and the editor state lock
//! - `types`: structured result records returned to JavaScript
//! - `editor`: lifecycle, palette, and cell text operations
//! - `selection`: cell click / clear / query operations
//! - `style`: color, font size, theme, and title operations
//! - `resize`: drag-resize state machine driving
//! - `rows`: row add/delete for the data bands
//! - `storage`: local-storage save/load/clear
//! - `render`: markup generation and DOM patching
//! - `export`: PNG capture of the table via the page rasterizer

pub mod editor;
pub mod export;
pub mod helpers;
pub mod render;
pub mod resize;
pub mod rows;
pub mod selection;
pub mod storage;
pub mod style;
pub mod types;

// Re-export all public functions so the generated JS module is flat
pub use editor::{get_editor_state, init_editor, palette_colors, set_cell_text};
pub use export::export_png;
pub use render::{render_table, sync_dom};
pub use resize::{begin_column_resize, begin_row_resize, end_resize, resize_move};
pub use rows::{add_row, delete_row};
pub use selection::{clear_selection, click_cell, get_selection};
pub use storage::{clear_state, load_state, save_state};
pub use style::{
    apply_font_size_px, apply_palette_color, set_color_target, set_last_color_input,
    set_theme_color, set_title,
};

//! Browser Table Editor WASM Module
//!
//! This is the main WASM module for the table editor page. It owns the
//! cell-grid table state (selection, styling, sizing, persistence) and
//! renders the markup the JavaScript shell patches into the capture area.

pub mod api;
pub mod models;
pub mod render;
pub mod storage;

// Re-export commonly used types
pub use models::core::*;
pub use models::editor_state::*;
pub use models::resize::*;
pub use models::selection::*;
pub use models::style::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Table editor WASM module initialized");
}

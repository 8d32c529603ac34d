//! Editor state management
//!
//! The EditorState struct is the WASM-owned source of truth for everything
//! the page shows: the table document, the transient selection and resize
//! state, and the settings-panel values that persist alongside the table.

use serde::{Deserialize, Serialize};

use super::core::{CellAddr, TableDoc};
use super::resize::ResizeController;
use super::selection::{ClickModifiers, SelectionModel};
use super::style::ColorTarget;

/// Outcome of routing a cell click through the editor state
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClickOutcome {
    /// The selection changed
    Selected,

    /// A resize drag is active; the click was swallowed
    Suppressed,

    /// Not a selectable cell; nothing happened
    Ignored,
}

/// Complete editor state (WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditorState {
    /// The table being edited
    pub doc: TableDoc,

    /// Current selection; transient, never persisted
    pub selection: SelectionModel,

    /// Drag-resize state machine; transient
    pub resize: ResizeController,

    /// Chosen target for palette colors (text vs background)
    pub color_target: ColorTarget,

    /// Identifier of the last-focused settings color input
    pub last_color_input: Option<String>,
}

impl EditorState {
    /// Create editor state around a document
    pub fn new(doc: TableDoc) -> Self {
        Self {
            doc,
            selection: SelectionModel::new(),
            resize: ResizeController::new(),
            color_target: ColorTarget::default(),
            last_color_input: None,
        }
    }

    /// Route a cell click, suppressing it while a resize drag is active so
    /// the drag release is never misread as a selection click.
    pub fn click_cell(&mut self, addr: CellAddr, modifiers: ClickModifiers) -> ClickOutcome {
        if self.resize.is_active() {
            return ClickOutcome::Suppressed;
        }
        if self.selection.click(&self.doc, addr, modifiers) {
            ClickOutcome::Selected
        } else {
            ClickOutcome::Ignored
        }
    }
}

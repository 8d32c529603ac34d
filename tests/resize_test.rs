// Resize state machine: clamped drags, uniform propagation through the
// document, live readout values, and click suppression during a drag.

use table_editor_wasm::models::{
    CellAddr, ClickModifiers, ClickOutcome, EditorState, ResizeAxis, ResizeController, TableDoc,
    MIN_COLUMN_WIDTH_PX, MIN_ROW_HEIGHT_PX,
};

fn doc() -> TableDoc {
    TableDoc::with_bands(4, 2, 2)
}

#[test]
fn column_drag_applies_the_pointer_delta() {
    let mut doc = doc();
    let mut resize = ResizeController::new();

    assert!(resize.begin_column(&doc, 1, 200.0, 120.0));
    let readout = resize.update(&mut doc, 250.0, 0.0).unwrap();

    assert_eq!(readout.axis, ResizeAxis::Column);
    assert_eq!(readout.pixels, 170.0);
    assert_eq!(doc.column_widths[1], Some(170.0));
    assert!(resize.finish());
}

#[test]
fn column_width_clamps_at_the_minimum() {
    let mut doc = doc();
    let mut resize = ResizeController::new();

    resize.begin_column(&doc, 0, 300.0, 40.0);
    // Drag far left: 40 - 290 would be -250, must clamp to the minimum.
    let readout = resize.update(&mut doc, 10.0, 0.0).unwrap();

    assert_eq!(readout.pixels, MIN_COLUMN_WIDTH_PX);
    assert_eq!(doc.column_widths[0], Some(MIN_COLUMN_WIDTH_PX));
}

#[test]
fn row_drag_applies_and_clamps_height() {
    let mut doc = doc();
    let mut resize = ResizeController::new();

    assert!(resize.begin_row(&doc, 2, 100.0, 28.0));
    let readout = resize.update(&mut doc, 0.0, 140.0).unwrap();
    assert_eq!(readout.axis, ResizeAxis::Row);
    assert_eq!(readout.pixels, 68.0);
    assert_eq!(doc.rows[2].height_px, Some(68.0));

    let readout = resize.update(&mut doc, 0.0, 10.0).unwrap();
    assert_eq!(readout.pixels, MIN_ROW_HEIGHT_PX);
    assert_eq!(doc.rows[2].height_px, Some(MIN_ROW_HEIGHT_PX));
}

#[test]
fn the_notice_row_has_no_drag() {
    let doc = doc();
    let mut resize = ResizeController::new();

    // Row 4 is the full-width notice row.
    assert!(!resize.begin_row(&doc, 4, 0.0, 30.0));
    assert!(!resize.is_active());
}

#[test]
fn out_of_range_targets_are_refused() {
    let doc = doc();
    let mut resize = ResizeController::new();

    assert!(!resize.begin_column(&doc, 4, 0.0, 100.0));
    assert!(!resize.begin_row(&doc, 99, 0.0, 100.0));
}

#[test]
fn only_one_drag_at_a_time() {
    let doc = doc();
    let mut resize = ResizeController::new();

    assert!(resize.begin_column(&doc, 0, 0.0, 100.0));
    assert!(!resize.begin_column(&doc, 1, 0.0, 100.0));
    assert!(!resize.begin_row(&doc, 2, 0.0, 30.0));
}

#[test]
fn idle_controller_ignores_moves_and_finishes() {
    let mut doc = doc();
    let mut resize = ResizeController::new();

    assert_eq!(resize.update(&mut doc, 50.0, 50.0), None);
    assert!(!resize.finish(), "finish without a drag reports inactive");
    assert_eq!(doc.column_widths, vec![None; 4]);
}

#[test]
fn finish_returns_to_idle() {
    let mut doc = doc();
    let mut resize = ResizeController::new();

    resize.begin_column(&doc, 0, 0.0, 100.0);
    assert!(resize.is_active());
    assert!(resize.finish());
    assert!(!resize.is_active());
    assert_eq!(resize.update(&mut doc, 10.0, 10.0), None);
}

#[test]
fn cell_clicks_are_suppressed_while_dragging() {
    let mut state = EditorState::new(doc());

    state.resize.begin_column(&state.doc, 0, 0.0, 100.0);
    let outcome = state.click_cell(CellAddr { row: 2, col: 0 }, ClickModifiers::plain());

    assert_eq!(outcome, ClickOutcome::Suppressed);
    assert!(state.selection.is_empty(), "a drag release must not select cells");

    state.resize.finish();
    let outcome = state.click_cell(CellAddr { row: 2, col: 0 }, ClickModifiers::plain());
    assert_eq!(outcome, ClickOutcome::Selected);
}

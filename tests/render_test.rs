// Rendering: the markup mirrors the model — marker classes, inline sizing,
// handle placement, and escaping.

use table_editor_wasm::models::{
    CellAddr, ClickModifiers, SelectionModel, TableDoc, ThemeRole,
};
use table_editor_wasm::render::render_table_html;

fn addr(row: usize, col: usize) -> CellAddr {
    CellAddr { row, col }
}

fn doc() -> TableDoc {
    TableDoc::with_bands(3, 2, 2)
}

#[test]
fn band_classes_cover_every_row() {
    let html = render_table_html(&doc(), &SelectionModel::new());

    assert!(html.contains("class=\"column-number-row\""));
    assert!(html.contains("class=\"header-row\""));
    assert!(html.contains("class=\"top-data-row\""));
    assert!(html.contains("class=\"middle-notice-row\""));
    assert!(html.contains("class=\"bottom-data-row\""));
}

#[test]
fn selected_marker_tracks_the_selection_exactly() {
    let doc = doc();
    let mut sel = SelectionModel::new();
    sel.click(&doc, addr(2, 1), ClickModifiers::plain());
    sel.click(&doc, addr(3, 0), ClickModifiers::shift());

    let html = render_table_html(&doc, &sel);
    assert_eq!(
        html.matches("class=\"selected\"").count(),
        2,
        "exactly the selected cells carry the marker class"
    );

    let unselected = render_table_html(&doc, &SelectionModel::new());
    assert!(!unselected.contains("selected"));
}

#[test]
fn cells_carry_their_grid_position() {
    let html = render_table_html(&doc(), &SelectionModel::new());
    assert!(html.contains("data-row=\"2\" data-col=\"0\""));
    assert!(html.contains("data-row=\"6\" data-col=\"2\""));
}

#[test]
fn notice_row_spans_the_table() {
    let mut doc = doc();
    doc.title = Some("Season 2026".to_string());

    let html = render_table_html(&doc, &SelectionModel::new());
    assert!(html.contains("colspan=\"3\""));
    assert!(html.contains(">Season 2026<") || html.contains("Season 2026<div"));
}

#[test]
fn editable_cells_are_contenteditable_fixed_cells_are_not() {
    let html = render_table_html(&doc(), &SelectionModel::new());

    // Column-number cells render their label but no contenteditable.
    let number_cell = html
        .split("<tr")
        .nth(1)
        .expect("column-number row present");
    assert!(!number_cell.contains("contenteditable"));
    assert!(html.contains("contenteditable=\"true\""));
}

#[test]
fn column_width_reaches_every_row_of_the_column() {
    let mut doc = doc();
    doc.set_column_width(1, 150.0);

    let html = render_table_html(&doc, &SelectionModel::new());
    // Numbers, header, two top rows, two bottom rows — the notice row spans.
    assert_eq!(html.matches("width: 150px; min-width: 150px").count(), 6);
}

#[test]
fn row_height_lands_on_the_row_and_its_cells() {
    let mut doc = doc();
    doc.set_row_height(2, 72.0);

    let html = render_table_html(&doc, &SelectionModel::new());
    assert!(html.contains("<tr class=\"top-data-row\" style=\"height: 72px\">"));
    assert!(html.contains("height: 72px\""));
}

#[test]
fn font_size_renders_with_the_fixed_line_height() {
    let mut doc = doc();
    doc.cell_mut(addr(2, 0)).unwrap().style.font_size_px = Some(24.0);

    let html = render_table_html(&doc, &SelectionModel::new());
    assert!(html.contains("font-size: 24px; line-height: 1.2"));
}

#[test]
fn handles_skip_the_last_column_the_last_row_and_the_notice_row() {
    let d = doc();
    let html = render_table_html(&d, &SelectionModel::new());

    let rows: Vec<&str> = html.split("<tr").skip(1).collect();
    assert_eq!(rows.len(), 7);

    // Notice row (index 4): no handles at all.
    assert!(!rows[4].contains("col-resizer"));
    assert!(!rows[4].contains("row-resizer"));

    // Full rows: a column handle on every cell but the last of 3 columns.
    assert_eq!(rows[0].matches("col-resizer").count(), 2);

    // Last table row: column handles but no row handles.
    assert!(rows[6].contains("col-resizer"));
    assert!(!rows[6].contains("row-resizer"));

    // Interior data row: both handle kinds.
    assert!(rows[2].contains("col-resizer"));
    assert!(rows[2].contains("row-resizer"));
}

#[test]
fn text_and_colors_are_escaped() {
    let mut doc = doc();
    doc.set_cell_text(addr(2, 0), "<script>alert('x')</script>");
    doc.cell_mut(addr(2, 1)).unwrap().style.color = Some("\"><script>".to_string());

    let html = render_table_html(&doc, &SelectionModel::new());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn theme_colors_style_their_bands() {
    let mut doc = doc();
    doc.theme.set(ThemeRole::HeaderBackground, "#333333");
    doc.theme.set(ThemeRole::HeaderText, "#FFFFFF");
    doc.theme.set(ThemeRole::ColumnNumberText, "#999999");

    let html = render_table_html(&doc, &SelectionModel::new());
    assert!(html.contains("background-color: #333333"));
    assert!(html.contains("color: #FFFFFF"));
    assert!(html.contains("color: #999999"));
}

#[test]
fn cell_overrides_win_over_the_band_theme() {
    let mut doc = doc();
    doc.theme.set(ThemeRole::RowBackground, "#FFFFFF");
    doc.cell_mut(addr(2, 0)).unwrap().style.background_color = Some("#FF0000".to_string());

    let html = render_table_html(&doc, &SelectionModel::new());
    let cell = html
        .split("data-row=\"2\" data-col=\"0\"")
        .nth(1)
        .and_then(|rest| rest.split("</td>").next())
        .expect("cell present");
    let theme_pos = cell.find("background-color: #FFFFFF").expect("band theme present");
    let override_pos = cell.find("background-color: #FF0000").expect("override present");
    assert!(override_pos > theme_pos, "the override must come last to win");
}

// Row mutator contract: cloned rows land inside their band with cleared
// content, and a band never loses its last row.

use table_editor_wasm::models::{BandKind, CellAddr, RowMutationError, TableDoc};

fn addr(row: usize, col: usize) -> CellAddr {
    CellAddr { row, col }
}

#[test]
fn added_top_row_lands_before_the_notice_row() {
    // Rows: 0 numbers, 1 header, 2 top, 3 notice, 4 bottom
    let mut doc = TableDoc::with_bands(3, 1, 1);

    let index = doc.add_row(BandKind::Top).unwrap();
    assert_eq!(index, 3);
    assert_eq!(doc.band_of_row(3), Some(BandKind::Top));
    assert_eq!(doc.band_of_row(4), Some(BandKind::MiddleNotice));
    assert_eq!(doc.rows_in_band(BandKind::Top).len(), 2);
}

#[test]
fn added_bottom_row_lands_at_the_table_end() {
    let mut doc = TableDoc::with_bands(3, 1, 2);

    let index = doc.add_row(BandKind::Bottom).unwrap();
    assert_eq!(index, doc.rows.len() - 1);
    assert_eq!(doc.band_of_row(index), Some(BandKind::Bottom));
}

#[test]
fn added_rows_start_clean() {
    let mut doc = TableDoc::with_bands(3, 1, 1);

    // Dirty the template row the clone comes from.
    doc.set_cell_text(addr(2, 0), "template text");
    doc.cell_mut(addr(2, 1)).unwrap().style.background_color = Some("#FF0000".to_string());
    doc.set_row_height(2, 64.0);

    let index = doc.add_row(BandKind::Top).unwrap();
    let row = &doc.rows[index];
    assert!(row.cells.iter().all(|c| c.text.is_empty()), "cloned text must be cleared");
    assert!(row.cells.iter().all(|c| c.style.is_empty()), "cloned styles must be cleared");
    assert!(row.cells.iter().all(|c| c.editable));
    assert_eq!(row.cells.len(), doc.column_count());
}

#[test]
fn deleting_keeps_at_least_one_row_per_band() {
    let mut doc = TableDoc::with_bands(3, 1, 2);

    assert!(doc.delete_row(BandKind::Bottom).is_ok());
    let before = doc.rows.len();

    let err = doc.delete_row(BandKind::Bottom).unwrap_err();
    assert_eq!(err, RowMutationError::LastRow);
    assert_eq!(doc.rows.len(), before, "a refused delete must not change the table");
    assert_eq!(doc.rows_in_band(BandKind::Bottom).len(), 1);
}

#[test]
fn delete_removes_the_last_row_of_the_band() {
    let mut doc = TableDoc::with_bands(3, 3, 1);
    doc.set_cell_text(addr(4, 0), "last top row");

    let index = doc.delete_row(BandKind::Top).unwrap();
    assert_eq!(index, 4);
    assert_eq!(doc.rows_in_band(BandKind::Top).len(), 2);
    assert!(doc
        .rows
        .iter()
        .flat_map(|r| r.cells.iter())
        .all(|c| c.text != "last top row"));
}

#[test]
fn fixed_bands_reject_mutation() {
    let mut doc = TableDoc::with_bands(3, 1, 1);

    for band in [BandKind::ColumnNumbers, BandKind::Header, BandKind::MiddleNotice] {
        assert_eq!(doc.add_row(band), Err(RowMutationError::FixedBand));
        assert_eq!(doc.delete_row(band), Err(RowMutationError::FixedBand));
    }
}

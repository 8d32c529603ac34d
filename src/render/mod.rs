//! HTML view of the table model
//!
//! Pure markup generation: the document plus the selection model in, the
//! `<tbody>` inner markup out. The shell patches the result into the
//! capture area; nothing here touches the DOM. Band classes, dataset
//! attributes, the `selected` marker class, inline width/height/style
//! properties, and the drag handles are all derived from the model so the
//! page never becomes the database.

use crate::models::{BandKind, Cell, Row, SelectionModel, TableDoc, FONT_LINE_HEIGHT};

/// CSS class identifying a row's band
fn band_class(band: BandKind) -> &'static str {
    match band {
        BandKind::ColumnNumbers => "column-number-row",
        BandKind::Header => "header-row",
        BandKind::Top => "top-data-row",
        BandKind::MiddleNotice => "middle-notice-row",
        BandKind::Bottom => "bottom-data-row",
    }
}

/// Escape text for element content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inline style for one cell: column width, row height, theme colors by
/// band, then per-cell overrides (overrides win by coming last).
fn cell_style(doc: &TableDoc, row: &Row, cell: &Cell, col_idx: usize) -> String {
    let mut props: Vec<String> = Vec::new();

    if !row.is_notice() {
        if let Some(Some(width)) = doc.column_widths.get(col_idx) {
            props.push(format!("width: {}px", width));
            props.push(format!("min-width: {}px", width));
        }
    }
    if let Some(height) = row.height_px {
        props.push(format!("height: {}px", height));
    }

    let theme = &doc.theme;
    let (band_background, band_text) = match row.band {
        BandKind::ColumnNumbers => (None, theme.column_number_text.as_ref()),
        BandKind::Header => (theme.header_background.as_ref(), theme.header_text.as_ref()),
        BandKind::Top | BandKind::Bottom => {
            (theme.row_background.as_ref(), theme.row_text.as_ref())
        }
        BandKind::MiddleNotice => (None, None),
    };
    if let Some(color) = band_background {
        props.push(format!("background-color: {}", escape_html(color)));
    }
    if let Some(color) = band_text {
        props.push(format!("color: {}", escape_html(color)));
    }

    if let Some(color) = &cell.style.background_color {
        props.push(format!("background-color: {}", escape_html(color)));
    }
    if let Some(color) = &cell.style.color {
        props.push(format!("color: {}", escape_html(color)));
    }
    if let Some(px) = cell.style.font_size_px {
        props.push(format!("font-size: {}px", px));
        props.push(format!("line-height: {}", FONT_LINE_HEIGHT));
    }

    props.join("; ")
}

/// Render one cell, including its drag handles.
///
/// Handle placement follows the page contract: no column handle on the last
/// column, no row handle on the last table row, and none at all on the
/// full-width notice row.
fn render_cell(
    doc: &TableDoc,
    selection: &SelectionModel,
    row: &Row,
    row_idx: usize,
    cell: &Cell,
    col_idx: usize,
    is_last_row: bool,
) -> String {
    let mut classes: Vec<&str> = Vec::new();
    if row.is_notice() {
        classes.push("notice-cell");
    }
    if selection.contains(crate::models::CellAddr {
        row: row_idx,
        col: col_idx,
    }) {
        classes.push("selected");
    }

    let mut attrs = String::new();
    if !classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", classes.join(" ")));
    }
    attrs.push_str(&format!(" data-row=\"{}\" data-col=\"{}\"", row_idx, col_idx));
    if row.is_notice() {
        attrs.push_str(&format!(" colspan=\"{}\"", doc.column_count()));
    }
    if cell.editable {
        attrs.push_str(" contenteditable=\"true\"");
    }
    let style = cell_style(doc, row, cell, col_idx);
    if !style.is_empty() {
        attrs.push_str(&format!(" style=\"{}\"", style));
    }

    let text = if row.is_notice() {
        doc.title.as_deref().unwrap_or("")
    } else {
        &cell.text
    };

    let mut handles = String::new();
    if !row.is_notice() {
        let is_last_col = col_idx + 1 == row.cells.len();
        if !is_last_col {
            handles.push_str("<div class=\"col-resizer\"></div>");
        }
        if !is_last_row {
            handles.push_str("<div class=\"row-resizer\"></div>");
        }
    }

    format!("<td{}>{}{}</td>", attrs, escape_html(text), handles)
}

/// Render the `<tbody>` inner markup for the whole table
pub fn render_table_html(doc: &TableDoc, selection: &SelectionModel) -> String {
    let mut html = String::new();
    let row_count = doc.rows.len();

    for (row_idx, row) in doc.rows.iter().enumerate() {
        let is_last_row = row_idx + 1 == row_count;

        html.push_str(&format!("<tr class=\"{}\"", band_class(row.band)));
        if let Some(height) = row.height_px {
            html.push_str(&format!(" style=\"height: {}px\"", height));
        }
        html.push('>');

        for (col_idx, cell) in row.cells.iter().enumerate() {
            html.push_str(&render_cell(
                doc, selection, row, row_idx, cell, col_idx, is_last_row,
            ));
        }
        html.push_str("</tr>");
    }

    html
}

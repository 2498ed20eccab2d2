use std::fmt::Write;

use crate::model::SheetGrid;

/// Rows shown per sheet unless the caller asks for more.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Renders the leading rows of every sheet for eyeballing header layouts.
///
/// Each sheet opens with `--- Sheet: <name> ---`; each row reads
/// `Row <i>: [<cell>, ...]` with line breaks inside cells flattened to spaces.
pub fn render_preview(sheets: &[SheetGrid], rows: usize) -> String {
    let mut out = String::new();
    for sheet in sheets {
        let width = sheet.width();
        let _ = writeln!(out, "\n--- Sheet: {} ---", sheet.name);
        for row_idx in 0..rows.min(sheet.height()) {
            let cells: Vec<String> = (0..width)
                .map(|col| {
                    let text = sheet.cell(row_idx, col).normalized().replace(['\r', '\n'], " ");
                    format!("{text:?}")
                })
                .collect();
            let _ = writeln!(out, "Row {row_idx}: [{}]", cells.join(", "));
        }
    }
    out
}

use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::model::{Cell, SheetGrid};

/// Reads every sheet of an `.xlsx` workbook, in workbook order, as grids
/// addressed from cell A1.
pub fn read_workbook(path: &Path) -> Result<Vec<SheetGrid>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = read_sheet(&mut workbook, &name)?;
        let grid = range_to_grid(&name, &range);
        debug!(sheet = %name, rows = grid.height(), columns = grid.width(), "sheet loaded");
        sheets.push(grid);
    }

    Ok(sheets)
}

fn read_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

/// Converts a used range into a grid, padding back the empty rows and columns
/// that precede it so indices line up with spreadsheet coordinates.
pub fn range_to_grid(name: &str, range: &Range<DataType>) -> SheetGrid {
    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    SheetGrid::new(name, rows)
}

fn cell_from_data(cell: &DataType) -> Cell {
    match cell {
        DataType::String(value) => Cell::text(value.clone()),
        DataType::Float(value) if value.is_nan() => Cell::Empty,
        DataType::Float(value) => Cell::text(value.to_string()),
        DataType::Int(value) => Cell::text(value.to_string()),
        DataType::Bool(value) => Cell::text(value.to_string()),
        DataType::Empty => Cell::Empty,
        other => Cell::text(other.to_string()),
    }
}

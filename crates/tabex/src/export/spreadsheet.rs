//! XLSX writer.

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};

use crate::error::{Result, TabexError};
use crate::table::{CellValue, Table};

/// Write `table` as a one-sheet workbook.
///
/// Row 1 holds the column names. Numeric columns are written as numbers,
/// everything else as strings; empty cells are left blank.
pub(crate) fn write_workbook(table: &Table, sheet_name: &str, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(table, sheet_name).map_err(|e| TabexError::write(path, e))?;
    workbook.save(path).map_err(|e| TabexError::write(path, e))
}

fn build_workbook(table: &Table, sheet_name: &str) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();

    for (col, name) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, to_col(col)?, name, &header_format)?;
    }

    let kinds = table.column_kinds();
    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = to_row(row_idx + 1)?;
        for (col, (raw, kind)) in row.iter().zip(&kinds).enumerate() {
            let col = to_col(col)?;
            match CellValue::classify(raw, *kind) {
                CellValue::Number(n) => {
                    sheet.write_number(row_num, col, n)?;
                }
                CellValue::Text(s) => {
                    sheet.write_string(row_num, col, &s)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    Ok(workbook)
}

fn to_row(idx: usize) -> std::result::Result<RowNum, XlsxError> {
    RowNum::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

fn to_col(idx: usize) -> std::result::Result<ColNum, XlsxError> {
    ColNum::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

//! Excel workbook output.
//!
//! Writes one worksheet per rendered sheet with a bold header row, then
//! auto-fits the columns. The workbook is fully saved before returning.

use std::borrow::Cow;
use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use crate::config::{MAX_CELL_CHARS, MAX_SHEET_COLUMNS, MAX_SHEET_ROWS};
use crate::domain::RecordTables;
use crate::error_handling::ReportError;

use super::grid::render_sheets;
use super::types::{ReportLayout, SheetGrid};

/// Renders the tables in `layout` and saves them to `output`.
///
/// Returns the number of worksheets written.
///
/// # Errors
///
/// Returns `ReportError` if a table exceeds worksheet limits or the file
/// cannot be created.
pub fn write_report(
    tables: &RecordTables,
    output: &Path,
    layout: ReportLayout,
) -> Result<usize, ReportError> {
    let sheets = render_sheets(tables, layout);
    write_sheets(&sheets, output)?;
    Ok(sheets.len())
}

/// Saves already rendered sheets to `output`.
///
/// Cell values longer than a worksheet cell can hold are truncated with a
/// warning rather than failing the report.
pub fn write_sheets(sheets: &[SheetGrid], output: &Path) -> Result<(), ReportError> {
    for sheet in sheets {
        check_limits(sheet)?;
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let wrap_format = Format::new().set_text_wrap();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name.as_str())?;
        write_sheet(worksheet, sheet, &header_format, &wrap_format)?;
        worksheet.autofit();
    }

    workbook.save(output)?;
    log::debug!("Saved {} worksheet(s) to {}", sheets.len(), output.display());
    Ok(())
}

fn check_limits(sheet: &SheetGrid) -> Result<(), ReportError> {
    let columns = sheet
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(sheet.header.len()))
        .max()
        .unwrap_or(0);
    if columns > MAX_SHEET_COLUMNS {
        return Err(ReportError::TooManyColumns {
            sheet: sheet.name.clone(),
            columns,
        });
    }

    let rows = sheet.rows.len() + 1;
    if rows > MAX_SHEET_ROWS {
        return Err(ReportError::TooManyRows {
            sheet: sheet.name.clone(),
            rows,
        });
    }
    Ok(())
}

// Indices are within the worksheet limits once check_limits has passed
fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &SheetGrid,
    header_format: &Format,
    wrap_format: &Format,
) -> Result<(), ReportError> {
    for (col, title) in sheet.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, title.as_str(), header_format)?;
    }

    for (index, row) in sheet.rows.iter().enumerate() {
        let row_num = (index + 1) as RowNum;
        for (col, value) in row.iter().enumerate() {
            let col_num = col as ColNum;
            let text = cell_text(sheet, row_num, value);
            if sheet.wrap_column == Some(col) {
                if text.is_empty() {
                    worksheet.write_blank(row_num, col_num, wrap_format)?;
                } else {
                    worksheet.write_string_with_format(row_num, col_num, text.as_ref(), wrap_format)?;
                }
            } else if !text.is_empty() {
                worksheet.write_string(row_num, col_num, text.as_ref())?;
            }
        }
    }
    Ok(())
}

/// `value`, cut to `MAX_CELL_CHARS` characters if longer.
fn cell_text<'v>(sheet: &SheetGrid, row: RowNum, value: &'v str) -> Cow<'v, str> {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            log::warn!(
                "Truncated a {}-character value in sheet '{}' row {} to {} characters",
                value.chars().count(),
                sheet.name,
                row + 1,
                MAX_CELL_CHARS
            );
            Cow::Owned(value[..cut].to_string())
        }
        None => Cow::Borrowed(value),
    }
}

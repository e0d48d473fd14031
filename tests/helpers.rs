// Shared test helpers for input files and reading generated workbooks back.

use calamine::{open_workbook, Reader, Xlsx};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to a temporary file with the given suffix (e.g. ".csv").
#[allow(dead_code)] // Used by other test files
pub fn write_input(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp input file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write input");
    file.flush().expect("Failed to flush input");
    file
}

/// Sheet names of a workbook, in workbook order.
#[allow(dead_code)]
pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    workbook.sheet_names()
}

/// All cells of a sheet as strings, with trailing empty cells of each row dropped.
#[allow(dead_code)]
pub fn read_sheet(path: &Path, name: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    let range = workbook
        .worksheet_range(name)
        .expect("Failed to read worksheet");
    range
        .rows()
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            while cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            cells
        })
        .collect()
}

//! Report output.
//!
//! This module renders the per-kind tables into worksheet grids (expanded or
//! compact layout) and writes them to an Excel workbook.

mod grid;
mod types;
mod xlsx;

pub use grid::{render_sheet, render_sheets};
pub use types::{ReportLayout, SheetGrid};
pub use xlsx::{write_report, write_sheets};

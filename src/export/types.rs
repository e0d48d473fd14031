//! Report layout and rendered sheet types.

/// How multiple records of one host are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReportLayout {
    /// One column per record (`<KIND>_0`, `<KIND>_1`, ...)
    #[default]
    Expanded,
    /// All records newline-joined into one wrapped cell
    Compact,
}

/// A worksheet rendered to strings, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetGrid {
    /// Worksheet name
    pub name: String,
    /// Header row (written bold)
    pub header: Vec<String>,
    /// Data rows; shorter rows leave trailing cells blank
    pub rows: Vec<Vec<String>>,
    /// Column whose data cells need line wrapping, if any
    pub wrap_column: Option<usize>,
}

//! Table to sheet rendering for both layouts.

use crate::config::HOST_HEADER;
use crate::domain::{KindTable, RecordKind, RecordTables};

use super::types::{ReportLayout, SheetGrid};

/// Renders every populated table, in processing order.
pub fn render_sheets(tables: &RecordTables, layout: ReportLayout) -> Vec<SheetGrid> {
    tables
        .populated()
        .map(|(kind, table)| render_sheet(kind, table, layout))
        .collect()
}

/// Renders one table.
///
/// Expanded: header `Host/IP, <KIND>_0 .. <KIND>_{max_cols-1}`, rows as stored.
/// Compact: header `Host/IP, <KIND>`, rows `[host, fields joined by '\n']`.
pub fn render_sheet(kind: RecordKind, table: &KindTable, layout: ReportLayout) -> SheetGrid {
    let header_name = kind.header_name();
    let mut header = vec![HOST_HEADER.to_string()];

    match layout {
        ReportLayout::Expanded => {
            header.extend((0..table.max_cols).map(|i| format!("{header_name}_{i}")));
            SheetGrid {
                name: kind.label().to_string(),
                header,
                rows: table.rows.clone(),
                wrap_column: None,
            }
        }
        ReportLayout::Compact => {
            header.push(header_name);
            let rows = table
                .rows
                .iter()
                .map(|row| match row.split_first() {
                    Some((host, fields)) => vec![host.clone(), fields.join("\n")],
                    None => vec![String::new(), String::new()],
                })
                .collect();
            SheetGrid {
                name: kind.label().to_string(),
                header,
                rows,
                wrap_column: Some(1),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> KindTable {
        let mut table = KindTable::default();
        table.push("example.com", vec!["mx1.example.com".into(), "mx2.example.com".into()]);
        table.push("example.org", vec![]);
        table.push("example.net", vec!["mx.example.net".into()]);
        table
    }

    #[test]
    fn test_expanded_header_and_rows() {
        let grid = render_sheet(RecordKind::Mx, &sample_table(), ReportLayout::Expanded);
        assert_eq!(grid.name, "MX Data");
        assert_eq!(grid.header, vec!["Host/IP", "MX_DATA_0", "MX_DATA_1"]);
        assert_eq!(grid.rows[0], vec!["example.com", "mx1.example.com", "mx2.example.com"]);
        assert_eq!(grid.rows[1], vec!["example.org"]);
        assert_eq!(grid.wrap_column, None);
    }

    #[test]
    fn test_compact_header_and_rows() {
        let grid = render_sheet(RecordKind::Mx, &sample_table(), ReportLayout::Compact);
        assert_eq!(grid.header, vec!["Host/IP", "MX_DATA"]);
        assert_eq!(grid.rows[0], vec!["example.com", "mx1.example.com\nmx2.example.com"]);
        assert_eq!(grid.rows[1], vec!["example.org", ""]);
        assert_eq!(grid.wrap_column, Some(1));
    }

    #[test]
    fn test_compact_cell_is_join_of_expanded_tail() {
        let table = sample_table();
        let expanded = render_sheet(RecordKind::Mx, &table, ReportLayout::Expanded);
        let compact = render_sheet(RecordKind::Mx, &table, ReportLayout::Compact);
        for (e, c) in expanded.rows.iter().zip(&compact.rows) {
            assert_eq!(e[0], c[0], "host stays in column 0");
            assert_eq!(e[1..].join("\n"), c[1]);
        }
    }

    #[test]
    fn test_render_sheets_skips_empty_tables() {
        let mut tables = RecordTables::new();
        tables.get_mut(RecordKind::A).push("example.com", vec!["192.0.2.1".into()]);
        let sheets = render_sheets(&tables, ReportLayout::Expanded);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, "A Data");
    }

    #[test]
    fn test_expanded_with_no_fields_has_only_host_header() {
        let mut table = KindTable::default();
        table.push("example.com", vec![]);
        let grid = render_sheet(RecordKind::Dmarc, &table, ReportLayout::Expanded);
        assert_eq!(grid.header, vec!["Host/IP"]);
    }
}

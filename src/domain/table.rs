//! Per-kind result tables.

use strum::IntoEnumIterator;

use super::kind::RecordKind;

/// Rows collected for one record kind.
///
/// Each row is `[host, field_0, field_1, ...]`; `max_cols` is the widest
/// field count (host excluded) seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindTable {
    /// Widest field count over all rows
    pub max_cols: usize,
    /// Rows in insertion order
    pub rows: Vec<Vec<String>>,
}

impl KindTable {
    /// Appends `[host] + fields` and widens `max_cols` if needed.
    pub fn push(&mut self, host: &str, fields: Vec<String>) {
        self.max_cols = self.max_cols.max(fields.len());
        let mut row = Vec::with_capacity(fields.len() + 1);
        row.push(host.to_string());
        row.extend(fields);
        self.rows.push(row);
    }

    /// True until the first row is pushed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One table slot per record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTables {
    tables: [KindTable; 5],
}

impl RecordTables {
    /// Creates five empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for `kind`.
    pub fn get(&self, kind: RecordKind) -> &KindTable {
        &self.tables[kind.index()]
    }

    /// Mutable table for `kind`.
    pub fn get_mut(&mut self, kind: RecordKind) -> &mut KindTable {
        &mut self.tables[kind.index()]
    }

    /// Tables with at least one row, in processing order.
    pub fn populated(&self) -> impl Iterator<Item = (RecordKind, &KindTable)> {
        RecordKind::iter()
            .map(move |kind| (kind, self.get(kind)))
            .filter(|(_, table)| !table.is_empty())
    }
}

//! Per-host lookup orchestration.

use strum::IntoEnumIterator;

use super::kind::RecordKind;
use super::table::RecordTables;
use crate::dns::{lookup, RecordSource};
use crate::error_handling::{LookupError, LookupStats};

/// Runs every enabled lookup for each host and accumulates the rows.
///
/// Lookups are issued one at a time. A failed lookup never stops processing:
/// its message becomes the only field of the row.
pub struct DomainProcessor<'a, S> {
    source: &'a S,
    kinds: Vec<RecordKind>,
    tables: RecordTables,
    stats: LookupStats,
}

impl<'a, S: RecordSource> DomainProcessor<'a, S> {
    /// Creates a processor for the given kinds. Order and duplicates in `kinds`
    /// do not matter: kinds always run in `RecordKind` order, once each.
    pub fn new(source: &'a S, kinds: &[RecordKind]) -> Self {
        let kinds = RecordKind::iter().filter(|k| kinds.contains(k)).collect();
        Self {
            source,
            kinds,
            tables: RecordTables::new(),
            stats: LookupStats::new(),
        }
    }

    /// Looks up every enabled kind for `host` and appends one row per kind.
    pub async fn process(&mut self, host: &str) {
        for kind in self.kinds.iter().copied() {
            let outcome = self.lookup_kind(kind, host).await;
            self.stats.record(kind, outcome.is_ok());
            let fields = match outcome {
                Ok(records) => records,
                Err(e) => {
                    log::debug!("{} lookup for {host} failed: {e}", kind.label());
                    vec![e.to_string()]
                }
            };
            self.tables.get_mut(kind).push(host, fields);
        }
    }

    async fn lookup_kind(&self, kind: RecordKind, host: &str) -> Result<Vec<String>, LookupError> {
        let plan = kind.plan(host)?;
        lookup(self.source, &plan.name, plan.record_type, plan.filter).await
    }

    /// Rows accumulated so far.
    pub fn tables(&self) -> &RecordTables {
        &self.tables
    }

    /// Per-kind success and failure counts so far.
    pub fn stats(&self) -> &LookupStats {
        &self.stats
    }

    /// Consumes the processor, returning the tables and statistics.
    pub fn into_parts(self) -> (RecordTables, LookupStats) {
        (self.tables, self.stats)
    }
}

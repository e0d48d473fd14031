//! Lookup statistics tracking.
//!
//! Counts succeeded and failed lookups per record kind over a run. The run is
//! sequential, so plain counters behind `&mut self` are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::domain::RecordKind;

/// Succeeded/failed counters for one record kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    /// Lookups that returned records (possibly none after filtering)
    pub succeeded: usize,
    /// Lookups that produced a diagnostic instead of records
    pub failed: usize,
}

/// Per-kind lookup statistics. Every kind starts at zero.
#[derive(Debug, Clone)]
pub struct LookupStats {
    counts: HashMap<RecordKind, KindCounts>,
}

impl LookupStats {
    /// Creates statistics with every kind at zero.
    pub fn new() -> Self {
        let counts = RecordKind::iter()
            .map(|kind| (kind, KindCounts::default()))
            .collect();
        LookupStats { counts }
    }

    /// Records one lookup outcome for `kind`.
    pub fn record(&mut self, kind: RecordKind, succeeded: bool) {
        let entry = self.counts.entry(kind).or_default();
        if succeeded {
            entry.succeeded += 1;
        } else {
            entry.failed += 1;
        }
    }

    /// Counts for `kind`.
    pub fn get(&self, kind: RecordKind) -> KindCounts {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    /// Successful lookups across all kinds.
    pub fn total_succeeded(&self) -> usize {
        self.counts.values().map(|c| c.succeeded).sum()
    }

    /// Failed lookups across all kinds.
    pub fn total_failed(&self) -> usize {
        self.counts.values().map(|c| c.failed).sum()
    }

    /// Logs one line per kind that saw any lookups, in processing order.
    pub fn log_summary(&self) {
        for kind in RecordKind::iter() {
            let counts = self.get(kind);
            if counts.succeeded + counts.failed == 0 {
                continue;
            }
            if counts.failed > 0 {
                log::warn!(
                    "{}: {} lookups succeeded, {} failed",
                    kind.label(),
                    counts.succeeded,
                    counts.failed
                );
            } else {
                log::info!("{}: {} lookups succeeded", kind.label(), counts.succeeded);
            }
        }
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}

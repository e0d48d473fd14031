//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for each failure domain
//! - Per-kind lookup statistics
//!
//! Errors fall into two groups:
//! - **Fatal**: configuration, input and report errors abort the run
//! - **Recovered**: lookup errors become a diagnostic cell in the report

mod stats;
mod types;

// Re-export public API
pub use stats::{KindCounts, LookupStats};
pub use types::{ConfigError, InitializationError, InputError, LookupError, ReportError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_stats_initialization() {
        let stats = LookupStats::new();
        for kind in RecordKind::iter() {
            assert_eq!(stats.get(kind), KindCounts::default());
        }
        assert_eq!(stats.total_succeeded(), 0);
        assert_eq!(stats.total_failed(), 0);
    }

    #[test]
    fn test_lookup_stats_record() {
        let mut stats = LookupStats::new();
        stats.record(RecordKind::Spf, true);
        stats.record(RecordKind::Spf, false);
        stats.record(RecordKind::Spf, true);
        stats.record(RecordKind::Ptr, false);

        assert_eq!(
            stats.get(RecordKind::Spf),
            KindCounts {
                succeeded: 2,
                failed: 1
            }
        );
        assert_eq!(stats.get(RecordKind::Ptr).failed, 1);
        assert_eq!(stats.total_succeeded(), 2);
        assert_eq!(stats.total_failed(), 2);
    }
}

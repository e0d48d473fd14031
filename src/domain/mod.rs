//! Per-host lookup processing.
//!
//! This module turns hosts into report rows:
//! - `RecordKind` fixes the DNS question each lookup kind asks
//! - `RecordTables` holds one table per kind, sized by its widest row
//! - `DomainProcessor` runs the enabled kinds for each host in a fixed order
//!   (DMARC, SPF, MX, A, PTR) and appends `[host, ...records]` rows

mod kind;
mod process;
mod table;

pub use kind::{QueryPlan, RecordKind};
pub use process::DomainProcessor;
pub use table::{KindTable, RecordTables};

#[cfg(test)]
mod tests;

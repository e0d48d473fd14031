//! Lookup kinds and the DNS question each one asks.

use std::sync::LazyLock;

use hickory_resolver::proto::rr::RecordType;
use regex::Regex;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{DMARC_PREFIX, SPF_PATTERN};
use crate::dns::reverse_name;
use crate::error_handling::LookupError;

static SPF_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPF_PATTERN).expect("SPF pattern is a valid regex"));

/// The five lookup categories, declared in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum RecordKind {
    /// `_dmarc.<host>` TXT
    Dmarc,
    /// `<host>` TXT starting with `v=spf`
    Spf,
    /// `<host>` MX
    Mx,
    /// `<host>` A
    A,
    /// reverse name of `<host>` PTR
    Ptr,
}

/// One DNS question derived from a host and a kind.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    /// Query name, relative or fully qualified
    pub name: String,
    /// Record type to ask for
    pub record_type: RecordType,
    /// Answers whose text does not match are dropped
    pub filter: Option<&'static Regex>,
}

impl RecordKind {
    /// Worksheet name for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Dmarc => "DMARC Data",
            RecordKind::Spf => "SPF Data",
            RecordKind::Mx => "MX Data",
            RecordKind::A => "A Data",
            RecordKind::Ptr => "PTR Data",
        }
    }

    /// Column header stem: the label upper-cased with spaces as underscores.
    pub fn header_name(&self) -> String {
        self.label().to_uppercase().replace(' ', "_")
    }

    /// Position in processing order, also the table slot.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Record type queried for this kind.
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordKind::Dmarc | RecordKind::Spf => RecordType::TXT,
            RecordKind::Mx => RecordType::MX,
            RecordKind::A => RecordType::A,
            RecordKind::Ptr => RecordType::PTR,
        }
    }

    /// Builds the question for `host`.
    ///
    /// # Errors
    ///
    /// Only PTR can fail: `host` must be an IP address.
    pub fn plan(&self, host: &str) -> Result<QueryPlan, LookupError> {
        let name = match self {
            RecordKind::Dmarc => format!("{DMARC_PREFIX}{host}"),
            RecordKind::Spf | RecordKind::Mx | RecordKind::A => host.to_string(),
            RecordKind::Ptr => reverse_name(host)?,
        };
        let filter = match self {
            RecordKind::Spf => Some(&*SPF_FILTER),
            _ => None,
        };
        Ok(QueryPlan {
            name,
            record_type: self.record_type(),
            filter,
        })
    }
}

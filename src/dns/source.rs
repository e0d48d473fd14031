//! Query transport and the lookup adapter.
//!
//! `RecordSource` is the seam between the lookup logic and the network: the
//! hickory-backed [`HickorySource`] is used at runtime, and tests plug in a
//! static fixture.

use std::net::IpAddr;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use regex::Regex;

use super::decode::{record_text, to_fqdn};
use crate::error_handling::LookupError;

/// Something that can answer a single DNS question.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    /// Sends one query and returns the answer records of `record_type`.
    async fn query(&self, name: &str, record_type: RecordType) -> Result<Vec<RData>, LookupError>;
}

/// Record source backed by a `hickory-resolver` async resolver.
pub struct HickorySource {
    resolver: TokioAsyncResolver,
    nameservers: Vec<IpAddr>,
}

impl HickorySource {
    /// Wraps a resolver. `nameservers` is only used for reporting.
    pub fn new(resolver: TokioAsyncResolver, nameservers: Vec<IpAddr>) -> Self {
        Self {
            resolver,
            nameservers,
        }
    }

    /// Nameservers the resolver was configured with, in configuration order.
    pub fn nameservers(&self) -> &[IpAddr] {
        &self.nameservers
    }
}

impl RecordSource for HickorySource {
    async fn query(&self, name: &str, record_type: RecordType) -> Result<Vec<RData>, LookupError> {
        let fqdn = to_fqdn(name);
        match self.resolver.lookup(fqdn.as_str(), record_type).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter(|rdata| rdata.record_type() == record_type)
                .cloned()
                .collect()),
            Err(e) => {
                log::debug!("{record_type} lookup failed for {fqdn}: {e}");
                Err(map_resolve_error(&fqdn, record_type, &e))
            }
        }
    }
}

/// Converts a resolver error into a report-friendly lookup error.
pub fn map_resolve_error(name: &str, record_type: RecordType, error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound {
            query,
            response_code,
            ..
        } => {
            let queried = query.name().to_string();
            if *response_code == ResponseCode::NXDomain {
                LookupError::NxDomain(queried)
            } else {
                LookupError::NoAnswer {
                    name: queried,
                    record_type: record_type.to_string(),
                }
            }
        }
        ResolveErrorKind::Timeout => LookupError::Timeout(name.to_string()),
        _ => LookupError::Resolver(error.to_string()),
    }
}

/// Issues one query and decodes the answers to text.
///
/// When `filter` is given, decoded strings that do not match it are dropped;
/// an empty result after filtering is still a success.
pub async fn lookup<S: RecordSource>(
    source: &S,
    name: &str,
    record_type: RecordType,
    filter: Option<&Regex>,
) -> Result<Vec<String>, LookupError> {
    let answers = source.query(name, record_type).await?;
    Ok(answers
        .iter()
        .map(record_text)
        .filter(|text| filter.map_or(true, |re| re.is_match(text)))
        .collect())
}

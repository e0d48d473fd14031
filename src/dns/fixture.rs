//! In-memory record source.
//!
//! Answers questions from a fixed table, which makes runs reproducible without
//! network access. Names are matched case-insensitively as fully qualified
//! names; unknown names answer with NXDOMAIN.

use std::cell::RefCell;
use std::collections::HashMap;

use hickory_resolver::proto::rr::{RData, RecordType};

use super::decode::to_fqdn;
use super::source::RecordSource;
use crate::error_handling::LookupError;

/// Fixed table of answers keyed by (name, record type).
#[derive(Debug, Default)]
pub struct StaticSource {
    answers: HashMap<(String, RecordType), Result<Vec<RData>, LookupError>>,
    queries: RefCell<Vec<(String, RecordType)>>,
}

impl StaticSource {
    /// Creates a source that knows no names.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        to_fqdn(name).to_ascii_lowercase()
    }

    /// Registers the answer records for a question.
    pub fn with_records(mut self, name: &str, record_type: RecordType, records: Vec<RData>) -> Self {
        self.answers
            .insert((Self::key(name), record_type), Ok(records));
        self
    }

    /// Registers a failure for a question.
    pub fn with_error(mut self, name: &str, record_type: RecordType, error: LookupError) -> Self {
        self.answers
            .insert((Self::key(name), record_type), Err(error));
        self
    }

    /// Questions asked so far, in order.
    pub fn queries(&self) -> Vec<(String, RecordType)> {
        self.queries.borrow().clone()
    }
}

impl RecordSource for StaticSource {
    async fn query(&self, name: &str, record_type: RecordType) -> Result<Vec<RData>, LookupError> {
        let key = Self::key(name);
        self.queries.borrow_mut().push((key.clone(), record_type));
        match self.answers.get(&(key.clone(), record_type)) {
            Some(answer) => answer.clone(),
            None => Err(LookupError::NxDomain(key)),
        }
    }
}

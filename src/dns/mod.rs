//! DNS querying and record decoding.
//!
//! This module provides the lookup adapter on top of `hickory-resolver`:
//! - A single-question query behind the `RecordSource` trait
//! - Type-specific decoding of answers to report text
//! - Reverse-lookup (PTR) name synthesis
//! - An in-memory record source for offline runs
//!
//! Failures are returned as `LookupError` values, never raised past the caller.

mod decode;
mod fixture;
mod reverse;
mod source;

// Re-export public API
pub use decode::{record_text, to_fqdn, trim_root};
pub use fixture::StaticSource;
pub use reverse::reverse_name;
pub use source::{lookup, map_resolve_error, HickorySource, RecordSource};

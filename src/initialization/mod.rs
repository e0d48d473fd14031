//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON)
//! - DNS record source built from the resolver settings

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{configured_nameservers, init_resolver};

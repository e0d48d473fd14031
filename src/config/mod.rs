//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default CSV field, report labels, query prefixes)
//! - Library configuration types and validation
//! - CLI option types and parsing

pub mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use types::{
    check_report_extension, Config, InputFormat, InputType, LogFormat, LogLevel, ResolverSettings,
};

//! Error type definitions.
//!
//! This module defines the error types for each failure domain: configuration,
//! initialization, input reading, per-host lookups and report writing.

use std::net::AddrParseError;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Invalid option values or combinations. Always raised before any network activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Input file does not exist.
    #[error("File '{}' does not exist.", .0.display())]
    InputNotFound(PathBuf),

    /// Report path does not end in `.xlsx`.
    #[error("File must have a .xlsx extension: '{}'", .0.display())]
    ReportExtension(PathBuf),

    /// A `--ns` value that is not an IP address.
    #[error("Invalid IP address '{value}': {source}")]
    InvalidNameserver {
        /// Value as given on the command line
        value: String,
        /// Underlying parse failure
        source: AddrParseError,
    },

    /// `--host-ip` only applies to CSV input.
    #[error("--host-ip can not be used with type '{0}'")]
    HostFieldWithPlainInput(String),

    /// `--host-ip` given as an empty string.
    #[error("--host-ip must name a CSV column")]
    EmptyHostField,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failures while reading the host list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be opened or read.
    #[error("Failed to read input file '{}': {source}", path.display())]
    Io {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A CSV record could not be decoded.
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// The header row has no column with the requested name.
    #[error("CSV field '{field}' not found in header of '{}'", path.display())]
    MissingField {
        /// Requested column
        field: String,
        /// Input path
        path: PathBuf,
    },
}

/// A failed lookup for one (host, kind) pair.
///
/// These never abort a run: the message becomes the single field of the
/// affected row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The queried name does not exist.
    #[error("The DNS query name does not exist: {0}")]
    NxDomain(String),

    /// The name exists but has no records of the requested type.
    #[error("The DNS response does not contain an answer to the question: {name} IN {record_type}")]
    NoAnswer {
        /// Queried name
        name: String,
        /// Queried record type
        record_type: String,
    },

    /// No response from any nameserver within the resolver's timeout.
    #[error("The DNS operation timed out for {0}")]
    Timeout(String),

    /// A PTR lookup was requested for something that is not an IP address.
    #[error("'{0}' does not appear to be an IPv4 or IPv6 address")]
    NotAnAddress(String),

    /// Any other resolver failure (servfail, refused, malformed response, I/O).
    #[error("{0}")]
    Resolver(String),
}

/// Failures while writing the spreadsheet.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error reported by the workbook writer, including failing to create the file.
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A table is wider than a worksheet allows.
    #[error("Sheet '{sheet}' needs {columns} columns, more than a worksheet can hold")]
    TooManyColumns {
        /// Worksheet name
        sheet: String,
        /// Columns required
        columns: usize,
    },

    /// A table is longer than a worksheet allows.
    #[error("Sheet '{sheet}' needs {rows} rows, more than a worksheet can hold")]
    TooManyRows {
        /// Worksheet name
        sheet: String,
        /// Rows required
        rows: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(
            LookupError::NxDomain("_dmarc.nope.example.".to_string()).to_string(),
            "The DNS query name does not exist: _dmarc.nope.example."
        );
        assert_eq!(
            LookupError::NoAnswer {
                name: "example.com.".to_string(),
                record_type: "MX".to_string()
            }
            .to_string(),
            "The DNS response does not contain an answer to the question: example.com. IN MX"
        );
        assert_eq!(
            LookupError::NotAnAddress("not.an.ip".to_string()).to_string(),
            "'not.an.ip' does not appear to be an IPv4 or IPv6 address"
        );
    }

    #[test]
    fn test_config_error_messages_name_the_value() {
        let err = ConfigError::InputNotFound(PathBuf::from("hosts.csv"));
        assert_eq!(err.to_string(), "File 'hosts.csv' does not exist.");

        let err = ConfigError::HostFieldWithPlainInput("txt".to_string());
        assert_eq!(err.to_string(), "--host-ip can not be used with type 'txt'");
    }
}

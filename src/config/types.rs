//! Configuration types.
//!
//! This module defines the enums and structs that describe a lookup run. The
//! library `Config` carries no CLI dependencies and can be built in code; the
//! CLI surface lives in `config::cli`.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_HOST_FIELD, REPORT_EXTENSION};
use crate::domain::RecordKind;
use crate::error_handling::ConfigError;
use crate::export::ReportLayout;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Kind of input file as named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputType {
    /// Delimited file with a header row
    Csv,
    /// One host per line
    Txt,
}

impl InputType {
    /// Name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Csv => "csv",
            InputType::Txt => "txt",
        }
    }
}

/// How hosts are read from the input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// CSV with a header row; hosts come from the named column.
    Csv {
        /// Header name of the host column
        field: String,
    },
    /// Plain text, one host per line.
    Plain,
}

impl InputFormat {
    /// Builds the input format from the CLI pair `--input-type` / `--host-ip`.
    ///
    /// CSV input falls back to the `Domain` column. A field name is meaningless
    /// for plain text and is rejected rather than ignored.
    pub fn from_parts(input_type: InputType, field: Option<String>) -> Result<Self, ConfigError> {
        match (input_type, field) {
            (InputType::Csv, None) => Ok(InputFormat::Csv {
                field: DEFAULT_HOST_FIELD.to_string(),
            }),
            (InputType::Csv, Some(field)) => {
                if field.trim().is_empty() {
                    return Err(ConfigError::EmptyHostField);
                }
                Ok(InputFormat::Csv { field })
            }
            (InputType::Txt, None) => Ok(InputFormat::Plain),
            (InputType::Txt, Some(_)) => Err(ConfigError::HostFieldWithPlainInput(
                InputType::Txt.as_str().to_string(),
            )),
        }
    }
}

impl Default for InputFormat {
    fn default() -> Self {
        InputFormat::Csv {
            field: DEFAULT_HOST_FIELD.to_string(),
        }
    }
}

/// Resolver configuration, fixed once the run starts.
///
/// `None` nameservers means "use the system resolver configuration".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Explicit nameserver addresses, queried on port 53
    pub nameservers: Option<Vec<IpAddr>>,
}

impl ResolverSettings {
    /// Validates and collects nameserver addresses given as strings.
    pub fn from_addresses<S: AsRef<str>>(addresses: &[S]) -> Result<Self, ConfigError> {
        let nameservers = addresses
            .iter()
            .map(|addr| crate::config::cli::parse_nameserver(addr.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            nameservers: Some(nameservers),
        })
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dnscheck::{Config, RecordKind};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("domains.csv"),
///     output: PathBuf::from("report.xlsx"),
///     kinds: vec![RecordKind::Spf, RecordKind::Dmarc],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read hosts from
    pub input: PathBuf,

    /// How the input file is parsed
    pub input_format: InputFormat,

    /// Nameserver selection
    pub resolver: ResolverSettings,

    /// Enabled lookup kinds (processed in `RecordKind` order regardless of this order)
    pub kinds: Vec<RecordKind>,

    /// Worksheet layout
    pub layout: ReportLayout,

    /// Report path (.xlsx)
    pub output: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("domains.csv"),
            input_format: InputFormat::default(),
            resolver: ResolverSettings::default(),
            kinds: Vec::new(),
            layout: ReportLayout::Expanded,
            output: PathBuf::from("dns_report.xlsx"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks everything that must hold before any file is opened or any query is sent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let InputFormat::Csv { field } = &self.input_format {
            if field.trim().is_empty() {
                return Err(ConfigError::EmptyHostField);
            }
        }
        check_report_extension(&self.output)?;
        if !self.input.exists() {
            return Err(ConfigError::InputNotFound(self.input.clone()));
        }
        Ok(())
    }
}

/// Rejects report paths that do not end in `.xlsx` (any case).
pub fn check_report_extension(path: &Path) -> Result<(), ConfigError> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(REPORT_EXTENSION));
    if matches {
        Ok(())
    } else {
        Err(ConfigError::ReportExtension(path.to_path_buf()))
    }
}

//! Command-line options.
//!
//! Per-argument checks (input exists, report extension, nameserver syntax) run
//! inside clap's value parsers so they fail during argument parsing, before any
//! file is opened. Checks that span several arguments run in [`Opt::into_config`].

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::types::{
    check_report_extension, Config, InputFormat, InputType, LogFormat, LogLevel, ResolverSettings,
};
use crate::domain::RecordKind;
use crate::error_handling::ConfigError;
use crate::export::ReportLayout;

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # SPF and DMARC for every row of the "Domain" column
/// dnscheck -i domains.csv --spf --dmarc -o report.xlsx
///
/// # Reverse lookups for a plain list of addresses against a specific resolver
/// dnscheck -i ips.txt --input-type txt -x --ns 1.1.1.1 -o ptr.xlsx
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dnscheck",
    about = "Bulk DNS Lookup Tool",
    version
)]
pub struct Opt {
    /// CSV file containing a list of domains
    #[arg(short = 'i', long = "input", value_name = "FILE", value_parser = parse_input_path)]
    pub input: PathBuf,

    /// Type of input file to process
    #[arg(long, value_enum, default_value_t = InputType::Csv)]
    pub input_type: InputType,

    /// CSV field of host or IP (default: Domain)
    #[arg(long = "host-ip", value_name = "IP/HOST")]
    pub host_ip: Option<String>,

    /// List of DNS server addresses
    #[arg(long, value_name = "8.8.8.8", num_args = 1.., value_parser = parse_nameserver)]
    pub ns: Option<Vec<IpAddr>>,

    /// DMARC record lookup
    #[arg(long)]
    pub dmarc: bool,

    /// SPF record lookup
    #[arg(long)]
    pub spf: bool,

    /// MX record lookup
    #[arg(long)]
    pub mx: bool,

    /// A record lookup
    #[arg(short = 'a', long = "forward")]
    pub forward: bool,

    /// PTR record lookup, ip to host
    #[arg(short = 'x', long = "reverse")]
    pub reverse: bool,

    /// Compact format will add multiple records to single column
    #[arg(short = 'c', long)]
    pub compact: bool,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "XLSX", value_parser = parse_report_path)]
    pub output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Lookup kinds switched on by flags, in processing order.
    pub fn enabled_kinds(&self) -> Vec<RecordKind> {
        [
            (RecordKind::Dmarc, self.dmarc),
            (RecordKind::Spf, self.spf),
            (RecordKind::Mx, self.mx),
            (RecordKind::A, self.forward),
            (RecordKind::Ptr, self.reverse),
        ]
        .into_iter()
        .filter_map(|(kind, on)| on.then_some(kind))
        .collect()
    }

    /// Resolves cross-argument rules and produces the library configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let kinds = self.enabled_kinds();
        let input_format = InputFormat::from_parts(self.input_type, self.host_ip)?;
        let layout = if self.compact {
            ReportLayout::Compact
        } else {
            ReportLayout::Expanded
        };
        Ok(Config {
            input: self.input,
            input_format,
            resolver: ResolverSettings {
                nameservers: self.ns,
            },
            kinds,
            layout,
            output: self.output,
            log_level: self.log_level,
            log_format: self.log_format,
        })
    }
}

/// Parses one `--ns` value as an IPv4 or IPv6 address.
pub fn parse_nameserver(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .trim()
        .parse::<IpAddr>()
        .map_err(|source| ConfigError::InvalidNameserver {
            value: value.to_string(),
            source,
        })
}

/// Accepts an input path only if it exists.
pub fn parse_input_path(value: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(ConfigError::InputNotFound(path))
    }
}

/// Accepts a report path only if it ends in `.xlsx`.
pub fn parse_report_path(value: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(value);
    check_report_extension(&path)?;
    Ok(path)
}

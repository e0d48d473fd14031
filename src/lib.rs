//! dnscheck library: bulk DNS lookups with an Excel report
//!
//! This library reads a list of hosts (CSV column or plain text), runs the
//! enabled DMARC, SPF, MX, A and PTR lookups for each host, and writes one
//! worksheet per lookup kind to an `.xlsx` workbook.
//!
//! # Example
//!
//! ```no_run
//! use dnscheck::{run_lookups, Config, RecordKind};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("domains.csv"),
//!     output: std::path::PathBuf::from("report.xlsx"),
//!     kinds: vec![RecordKind::Mx, RecordKind::Spf],
//!     ..Default::default()
//! };
//!
//! let report = run_lookups(config).await?;
//! println!("Processed {} hosts, see {}", report.hosts_processed, report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use domain::RecordKind;
pub use export::ReportLayout;
pub use run::{run_lookups, run_with_source, LookupReport};

// Internal run module (contains the lookup pipeline)
mod run {
    use std::net::IpAddr;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::dns::RecordSource;
    use crate::domain::DomainProcessor;
    use crate::error_handling::LookupStats;
    use crate::export::write_report;
    use crate::initialization::init_resolver;
    use crate::input::open_hosts;

    /// Results of a lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Host list that was read
        pub input: PathBuf,
        /// Workbook that was written
        pub output: PathBuf,
        /// Nameservers the resolver used
        pub nameservers: Vec<IpAddr>,
        /// Number of hosts looked up
        pub hosts_processed: usize,
        /// Number of kind-labelled worksheets written
        pub sheets_written: usize,
        /// Per-kind success and failure counts
        pub stats: LookupStats,
    }

    /// Runs all enabled lookups for every host in the input and writes the report.
    ///
    /// The resolver is built from `config.resolver`; lookups run one at a time.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid (missing input, output not `.xlsx`)
    /// - The input file cannot be read or a CSV record is malformed
    /// - The report cannot be written
    ///
    /// A failed DNS lookup is never an error here: its message is written to
    /// the report instead.
    pub async fn run_lookups(config: Config) -> Result<LookupReport> {
        config.validate().context("Invalid configuration")?;
        info!("Input file: {}", config.input.display());

        let source = init_resolver(&config.resolver);
        let nameservers = source.nameservers().to_vec();
        info!("Nameserver(s): {}", format_nameservers(&nameservers));

        let mut report = process_hosts(&config, &source).await?;
        report.nameservers = nameservers;
        Ok(report)
    }

    /// Runs the pipeline against an already built record source.
    ///
    /// `nameservers` in the returned report is left empty.
    pub async fn run_with_source<S: RecordSource>(
        config: &Config,
        source: &S,
    ) -> Result<LookupReport> {
        config.validate().context("Invalid configuration")?;
        process_hosts(config, source).await
    }

    async fn process_hosts<S: RecordSource>(config: &Config, source: &S) -> Result<LookupReport> {
        let hosts = open_hosts(&config.input, &config.input_format)
            .context("Failed to read input file")?;

        let mut processor = DomainProcessor::new(source, &config.kinds);
        let mut hosts_processed = 0usize;
        for host in hosts {
            let host = host.context("Failed to read input file")?;
            info!("Processing: {host}");
            processor.process(&host).await;
            hosts_processed += 1;
        }

        let (tables, stats) = processor.into_parts();
        let sheets_written = write_report(&tables, &config.output, config.layout)
            .with_context(|| format!("Failed to write report {}", config.output.display()))?;
        stats.log_summary();

        Ok(LookupReport {
            input: config.input.clone(),
            output: config.output.clone(),
            nameservers: Vec::new(),
            hosts_processed,
            sheets_written,
            stats,
        })
    }

    fn format_nameservers(nameservers: &[IpAddr]) -> String {
        nameservers
            .iter()
            .map(IpAddr::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

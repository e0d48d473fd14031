//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnscheck` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use dnscheck::initialization::init_logger_with;
use dnscheck::{run_lookups, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // No arguments at all: show usage instead of clap's missing-argument error
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Opt::command().render_usage());
        process::exit(1);
    }

    let opt = Opt::parse();
    let config = match opt.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dnscheck error: {e}");
            process::exit(1);
        }
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_lookups(config).await {
        Ok(report) => {
            println!(
                "Processed {} host{} ({} lookups succeeded, {} failed)",
                report.hosts_processed,
                if report.hosts_processed == 1 { "" } else { "s" },
                report.stats.total_succeeded(),
                report.stats.total_failed()
            );
            println!("Please see report: {}", report.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dnscheck error: {:#}", e);
            process::exit(1);
        }
    }
}

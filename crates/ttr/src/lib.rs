//! # ttr
//!
//! **CLI Binary**
//!
//! Entry point for the `ttr` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Install logging
//! * Resolve settings (flags, `ttr.toml`, defaults)
//! * Dispatch commands to their handlers
//! * Report errors with hints and a non-zero exit code
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod input;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ttr_config::Cli;

/// Entry point used by the `ttr` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);
    let settings = config::load_settings(&cli.global)?;
    commands::dispatch(cli.command, settings)
}

/// Render an error chain plus any troubleshooting hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from `warn`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    // A second init in the same process (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

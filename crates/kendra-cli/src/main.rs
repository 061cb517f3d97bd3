#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;

use std::io::{self, Write};
use std::process;

use anyhow::Context;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "kendra_cli::startup";
pub const TRACING_TARGET_COMMAND: &str = "kendra_cli::command";
pub const TRACING_TARGET_CONFIG: &str = "kendra_cli::config";

fn main() {
    let Err(error) = run() else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_COMMAND,
            error = %error,
            "command failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing()?;
    cli.log();
    cli.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.command.run(&cli.service, &mut out)?;
    out.flush().context("failed to flush standard output")?;

    Ok(())
}

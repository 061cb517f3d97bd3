//! Subcommands.

mod marshal;
mod operations;
mod validate;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use kendra_protocol::{Operation, ServiceConfig};

use crate::TRACING_TARGET_COMMAND;

/// Subcommands of the `kendra` binary.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every operation with its target header and pagination.
    Operations(operations::OperationsArgs),

    /// Check a JSON request against the constraints of its operation.
    Validate(RequestArgs),

    /// Print the envelope that would be posted for a JSON request.
    Marshal(RequestArgs),
}

/// A request document and the operation it belongs to.
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Operation name as on the wire, e.g. `CreateFaq`.
    #[arg(value_parser = parse_operation)]
    pub operation: Operation,

    /// File holding the request JSON, or `-` for standard input.
    pub input: PathBuf,
}

impl RequestArgs {
    /// Reads the request document.
    fn read_input(&self) -> anyhow::Result<String> {
        if self.input.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read request from standard input")?;
            return Ok(text);
        }

        fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read request from '{}'", self.input.display()))
    }
}

impl Command {
    /// Runs the command, writing its output to `out`.
    pub fn run(&self, config: &ServiceConfig, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Self::Operations(args) => operations::run(args, out),
            Self::Validate(args) => {
                let input = args.read_input()?;
                tracing::debug!(
                    target: TRACING_TARGET_COMMAND,
                    operation = %args.operation,
                    bytes = input.len(),
                    "validating request"
                );
                validate::run(args.operation, &input, out)
            }
            Self::Marshal(args) => {
                let input = args.read_input()?;
                tracing::debug!(
                    target: TRACING_TARGET_COMMAND,
                    operation = %args.operation,
                    bytes = input.len(),
                    "marshalling request"
                );
                marshal::run(args.operation, config, &input, out)
            }
        }
    }
}

fn parse_operation(name: &str) -> Result<Operation, String> {
    name.parse().map_err(|_| {
        format!("unknown operation '{name}'; run `kendra operations` to list them")
    })
}

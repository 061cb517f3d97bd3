use std::io::Write;

use clap::Args;
use kendra_protocol::Operation;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Arguments of the `operations` subcommand.
#[derive(Debug, Clone, Args)]
pub struct OperationsArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationEntry {
    name: &'static str,
    target: String,
    paginated: bool,
    errors: Vec<&'static str>,
}

impl From<Operation> for OperationEntry {
    fn from(operation: Operation) -> Self {
        Self {
            name: operation.name(),
            target: operation.target(),
            paginated: operation.is_paginated(),
            errors: operation.error_kinds().iter().map(|kind| kind.as_str()).collect(),
        }
    }
}

pub(super) fn run(args: &OperationsArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let entries: Vec<OperationEntry> = Operation::iter().map(OperationEntry::from).collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    for entry in &entries {
        let paginated = if entry.paginated { "paginated" } else { "" };
        writeln!(out, "{:<width$}  {}  {paginated}", entry.name, entry.target)?;
    }

    Ok(())
}

//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── service: ServiceConfig   # Region, endpoint override, validation switch
//! └── command: Command         # operations | validate | marshal
//! ```
//!
//! Service settings can be provided via CLI arguments or environment variables.
//!
//! ```bash
//! kendra --region eu-west-1 marshal ListFaqs request.json
//! KENDRA_REGION=eu-west-1 kendra marshal ListFaqs - < request.json
//! ```

mod telemetry;

use std::process;

use anyhow::Context;
use clap::Parser;
use kendra_protocol::ServiceConfig;

use crate::command::Command;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "kendra")]
#[command(about = "Inspect, validate and marshal Amazon Kendra requests offline")]
#[command(version)]
pub struct Cli {
    /// Service endpoint and validation settings.
    #[clap(flatten)]
    pub service: ServiceConfig,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() -> anyhow::Result<()> {
        telemetry::init_tracing()
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.service
            .validate()
            .context("invalid service configuration")?;
        Ok(())
    }

    /// Logs build information and configuration at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            region = %self.service.region,
            endpoint = %self.service.endpoint_url(),
            validate_requests = self.service.validate_requests(),
            "Service configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

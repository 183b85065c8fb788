//! # Probe Command
//!
//! Resolves configuration, runs the collections API probe, and decides the
//! exit status.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    api::HttpTransport,
    config::{ConfigError, ConfigOverrides, ProbeConfig},
    constants::TOKEN_ENV_VAR,
    probe::{Probe, RunReport},
    ui,
};

/// Arguments for the probe command
#[derive(Debug, Clone, Default)]
pub struct ProbeArgs {
    pub overrides: ConfigOverrides,
    /// Exit non-zero when the run aborted or any check failed
    pub strict: bool,
}

/// Executes the probe, returning the process exit status.
pub fn execute(args: ProbeArgs) -> Result<i32> {
    let config = match ProbeConfig::load(args.overrides) {
        Ok(config) => config,
        Err(ConfigError::MissingToken) => {
            print_setup_instructions();
            return Ok(1);
        }
        Err(err) => return Err(err.into()),
    };
    tracing::debug!(?config, "resolved configuration");

    let transport = HttpTransport::new(config.base_url(), config.token())
        .context("Failed to build HTTP client")?;

    let report = Probe::new(config, transport).run_all(ui::confirm)?;

    Ok(exit_code(&report, args.strict))
}

/// Exit status for a finished run.
///
/// Informational by default: failed checks still exit 0 unless `strict`.
pub fn exit_code(report: &RunReport, strict: bool) -> i32 {
    i32::from(strict && !report.all_passed())
}

fn print_setup_instructions() {
    println!("{} {TOKEN_ENV_VAR} not set!", "ERROR:".red().bold());
    println!("\nPlease set your API token:");
    println!("  export {TOKEN_ENV_VAR}='your-token-here'");
    println!("\nOptional settings live in ~/.config/clipcheck/config (domain, collection_id).");
}

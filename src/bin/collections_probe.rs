//! # collections-probe
//!
//! Manual diagnostic for the collections API token and target collection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use clipcheck::{
    commands::{self, ProbeArgs},
    config::{ConfigOverrides, CreatePolicy},
    logging,
};

const PROBE_HELP: &str = "\
Environment:
  GLEAN_API_TOKEN     API bearer token (required)
  CLIPCHECK_LOG       Log filter, e.g. \"debug\" (overrides -v)

Configuration File:
  ~/.config/clipcheck/config   domain, collection_id, base_url, create_collection

Checks (in order):
  1. API connection        (stops the run on failure)
  2. List collections
  3. Target collection     (details and write access)
  4. Add test item         (or offer to create a test collection)";

#[derive(Parser)]
#[command(name = "collections-probe")]
#[command(version)]
#[command(about = "Check that an API token can read and write the target collection")]
#[command(
    long_about = "Check that an API token can read and write the target collection.\n\n\
Runs a fixed sequence of requests against the collections REST API and prints \
a pass/fail line for each, followed by a summary with next steps. Use it to \
validate credentials before configuring the browser extension."
)]
#[command(after_help = PROBE_HELP)]
struct Cli {
    /// Backend domain (e.g., example-be.glean.com)
    #[arg(long)]
    domain: Option<String>,

    /// Collection to check and add a test item to
    #[arg(long)]
    collection_id: Option<i64>,

    /// Full API base URL, overriding the one derived from --domain
    #[arg(long)]
    base_url: Option<String>,

    /// Create a test collection when the target is not accessible
    #[arg(long, value_enum)]
    create_collection: Option<CreatePolicy>,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    commands::probe(ProbeArgs {
        overrides: ConfigOverrides {
            domain: cli.domain,
            collection_id: cli.collection_id,
            base_url: cli.base_url,
            create_collection: cli.create_collection,
        },
        strict: cli.strict,
    })
}

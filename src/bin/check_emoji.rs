//! # check-emoji
//!
//! Pre-commit hook that fails when any staged file contains emoji.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use clipcheck::{commands, logging};

const HOOK_HELP: &str = "\
Exit Status:
  0  No emoji found
  1  Emoji found, or a file could not be read

Pre-commit Usage:
  check-emoji $(git diff --cached --name-only --diff-filter=ACM)";

#[derive(Parser)]
#[command(name = "check-emoji")]
#[command(version)]
#[command(about = "Fail when any of the given files contains emoji characters")]
#[command(
    long_about = "Scan files for emoji characters.\n\n\
Each file is read as UTF-8 and checked against a fixed set of emoji code-point \
ranges. The first file containing emoji is printed with every offending line \
and the check stops. Files that cannot be read are reported and skipped."
)]
#[command(after_help = HOOK_HELP)]
struct Cli {
    /// Files to scan
    files: Vec<PathBuf>,

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
    commands::check_emoji(&cli.files)
}

//! # Check Emoji Command
//!
//! Pre-commit entry point: scans the given files and maps the outcome to an
//! exit status.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};

use crate::emoji;

/// Executes the emoji check, returning the process exit status.
pub fn execute(files: &[PathBuf]) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = emoji::scan_paths(files, &mut out).context("Failed to write scan report")?;
    tracing::debug!(files = files.len(), ?outcome, "emoji scan finished");

    Ok(outcome.exit_code())
}

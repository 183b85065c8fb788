//! # UI Utilities
//!
//! Shared console output helpers: section headers, pass/fail lines,
//! yes/no prompts, and string truncation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::constants::HEADER_RULE_WIDTH;

// =============================================================================
// Section Output
// =============================================================================

/// Prints a section header framed by `=` rules.
pub fn print_header(text: &str) {
    let rule = "=".repeat(HEADER_RULE_WIDTH);
    println!("\n{rule}");
    println!("  {}", text.bold());
    println!("{rule}");
}

/// Prints a pass/fail line with an optional indented message.
///
/// Format: `PASS: {name}` or `FAIL: {name}`
pub fn print_result(name: &str, success: bool, message: &str) {
    if success {
        println!("{}: {name}", "PASS".green().bold());
    } else {
        println!("{}: {name}", "FAIL".red().bold());
    }
    if !message.is_empty() {
        println!("         {message}");
    }
}

/// Prints a notice with a yellow prefix.
pub fn print_notice(message: &str) {
    println!("\n{} {message}", "note:".yellow());
}

/// Prints a success line with a green prefix.
pub fn print_success(message: &str) {
    println!("{} {message}", "ok:".green());
}

// =============================================================================
// Prompts
// =============================================================================

/// Asks a yes/no question on stderr and reads the answer from stdin.
///
/// Returns `Ok(None)` when stdin is not a terminal, so callers never block
/// in hooks or CI.
pub fn confirm(question: &str) -> Result<Option<bool>> {
    if !io::stdin().is_terminal() {
        return Ok(None);
    }

    eprint!("{} ", format!("{question} (y/n):").bold());
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(Some(input.trim().eq_ignore_ascii_case("y")))
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to at most `max` characters, without ellipsis.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Returns the truncated body, or `HTTP {status}` when the body is empty.
pub fn body_or_status(body: &str, status: u16, max: usize) -> String {
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        truncate_chars(body, max).to_string()
    }
}

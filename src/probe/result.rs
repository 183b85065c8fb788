//! # Probe Results
//!
//! Outcome records produced by each check and the end-of-run summary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

use crate::{constants::SUMMARY_MESSAGE_TRUNCATE_LEN, ui};

/// Outcome of one check. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    test: String,
    success: bool,
    message: String,
}

impl TestResult {
    pub fn new(test: impl Into<String>, success: bool, message: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            success,
            message: message.into(),
        }
    }

    pub fn test(&self) -> &str {
        &self.test
    }

    pub const fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pass/fail counts over a sequence of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn of(results: &[TestResult]) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        Self {
            passed,
            failed: results.len() - passed,
        }
    }

    pub const fn all_passed(self) -> bool {
        self.failed == 0
    }
}

const REMEDIATION_STEPS: &[&str] = &[
    "Ensure your API token has COLLECTIONS scope",
    "Verify the token is a Client API token (not Indexing API)",
    "Check that collection ID exists or create a new one",
    "Update the extension configuration with correct values",
];

/// Prints the test summary: counts, failed checks, and next steps.
pub fn print_summary(results: &[TestResult]) {
    ui::print_header("Test Summary");

    let tally = Tally::of(results);
    println!("\nResults: {} passed, {} failed", tally.passed, tally.failed);

    if !tally.all_passed() {
        println!("\nFailed tests:");
        for result in results.iter().filter(|r| !r.success) {
            println!(
                "  - {}: {}",
                result.test.red(),
                ui::truncate_chars(&result.message, SUMMARY_MESSAGE_TRUNCATE_LEN)
            );
        }
    }

    println!("\nNext Steps:");
    if tally.all_passed() {
        ui::print_success("All tests passed! Your Glean API is properly configured.");
        ui::print_success("The Chrome extension should work with these credentials.");
    } else {
        for (idx, step) in REMEDIATION_STEPS.iter().enumerate() {
            println!("  {}. {step}", idx + 1);
        }
    }
}

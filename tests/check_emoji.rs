//! # Check Emoji Command Tests
//!
//! Runs the `check-emoji` binary the way a pre-commit hook does.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn check_emoji_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("check-emoji").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_remove("CLIPCHECK_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("write test file");
}

// =============================================================================
// Exit Status Tests
// =============================================================================

#[test]
fn test_clean_files_exit_zero_silently() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.rs", "fn main() {}\n");
    write(&dir, "b.md", "# Title\n\nCafé résumé\n");

    check_emoji_cmd(&dir)
        .args(["a.rs", "b.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_arguments_is_clean() {
    let dir = TempDir::new().unwrap();

    check_emoji_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_crlf_lines_print_without_carriage_return() {
    let dir = TempDir::new().unwrap();
    write(&dir, "win.txt", "plain\r\nbad \u{1F600}\r\n");

    check_emoji_cmd(&dir)
        .arg("win.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  Line 2: bad \u{1F600}\n"))
        .stdout(predicate::str::contains("\r").not());
}

#[test]
fn test_emoji_reports_every_offending_line() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "notes.md",
        "line one\nparty \u{1F389}\nplain\nrocket \u{1F680}\n",
    );

    check_emoji_cmd(&dir)
        .arg("notes.md")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Emoji found in: notes.md"))
        .stdout(predicate::str::contains("  Line 2: party \u{1F389}"))
        .stdout(predicate::str::contains("  Line 4: rocket \u{1F680}"))
        .stdout(predicate::str::contains("Line 1").not())
        .stdout(predicate::str::contains("Line 3").not());
}

#[test]
fn test_stops_at_first_offending_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "first.txt", "\u{2705} done\n");
    write(&dir, "second.txt", "\u{1F600}\n");

    check_emoji_cmd(&dir)
        .args(["first.txt", "second.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("first.txt"))
        .stdout(predicate::str::contains("second.txt").not());
}

#[test]
fn test_unreadable_file_reported_and_scan_continues() {
    let dir = TempDir::new().unwrap();
    write(&dir, "later.txt", "flag \u{1F1FA}\u{1F1F8}\n");

    check_emoji_cmd(&dir)
        .args(["missing.txt", "later.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error reading missing.txt"))
        .stdout(predicate::str::contains("Emoji found in: later.txt"));
}

#[test]
fn test_read_error_alone_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blob.bin"), [0xC3, 0x28, 0xFF]).unwrap();
    write(&dir, "ok.txt", "fine\n");

    check_emoji_cmd(&dir)
        .args(["blob.bin", "ok.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error reading blob.bin"))
        .stdout(predicate::str::contains("ok.txt").not());
}

// =============================================================================
// Hook Script Tests
// =============================================================================

fn git(dir: &TempDir, args: &[&str]) -> bool {
    std::process::Command::new("git")
        .args(args)
        .current_dir(dir.path())
        .output()
        .is_ok_and(|out| out.status.success())
}

#[test]
fn test_hook_handles_file_names_with_spaces() {
    let dir = TempDir::new().unwrap();
    if !git(&dir, &["init", "-q"]) {
        return;
    }
    write(&dir, "release notes.md", "shipped \u{1F680}\n");
    assert!(git(&dir, &["add", "release notes.md"]));

    let bin_dir = assert_cmd::cargo::cargo_bin("check-emoji")
        .parent()
        .unwrap()
        .to_path_buf();
    let path = format!(
        "{}:{}",
        bin_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    );
    let hook = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("hooks/pre-commit");

    Command::new("sh")
        .arg(hook)
        .current_dir(dir.path())
        .env("PATH", path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Emoji found in: release notes.md"));
}

//! # Emoji Scanner
//!
//! Pre-commit gate that rejects files containing emoji characters.
//!
//! ## Rules
//! 1. Files are read whole as UTF-8; unreadable files are reported and skipped
//! 2. Content is matched against a fixed set of emoji code-point ranges
//! 3. The first offending file is reported line by line and the scan stops
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use regex::Regex;
use thiserror::Error;

/// Inclusive code-point ranges treated as emoji.
///
/// Emoticons, pictographs, transport symbols, regional indicators,
/// dingbats, supplemental pictographs, and the enclosed supplements.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2600, 0x27BF),
    (0x1F900, 0x1F9FF),
    (0x1F018, 0x1F270),
];

/// Error raised while loading a file for scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened or read.
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("stream did not contain valid UTF-8")]
    NotUtf8 { path: PathBuf },
}

impl ScanError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::NotUtf8 { path } => path,
        }
    }
}

/// A file that contains at least one emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiHit {
    pub path: PathBuf,
    /// Offending lines as (1-indexed line number, line text).
    pub lines: Vec<(usize, String)>,
}

/// Result of scanning a set of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Every file was read and none contained emoji.
    Clean,
    /// Scanning stopped at the first file containing emoji.
    EmojiFound(EmojiHit),
    /// No emoji were found but this many files could not be read.
    ReadErrors(usize),
}

impl ScanOutcome {
    /// Process exit status for the pre-commit hook.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::EmojiFound(_) | Self::ReadErrors(_) => 1,
        }
    }
}

fn build_pattern() -> String {
    let mut class = String::from("[");
    for (start, end) in EMOJI_RANGES {
        class.push_str(&format!("\\x{{{start:X}}}-\\x{{{end:X}}}"));
    }
    class.push(']');
    class
}

/// Compiled emoji character class, built on first use.
fn emoji_regex() -> &'static Regex {
    static EMOJI_RE: OnceLock<Regex> = OnceLock::new();
    EMOJI_RE.get_or_init(|| {
        Regex::new(&build_pattern()).expect("emoji ranges form a valid class")
    })
}

/// Returns true if the text contains any character from [`EMOJI_RANGES`].
pub fn contains_emoji(text: &str) -> bool {
    emoji_regex().is_match(text)
}

/// Returns every line containing emoji, numbered from 1.
///
/// `\r\n`, `\r`, and `\n` all end a line, and no terminator is kept.
pub fn offending_lines(text: &str) -> Vec<(usize, String)> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .enumerate()
        .filter(|(_, line)| contains_emoji(line))
        .map(|(idx, line)| (idx + 1, line.to_string()))
        .collect()
}

/// Loads one file and checks it for emoji.
///
/// The file handle is released as soon as the content has been read.
pub fn scan_file(path: &Path) -> Result<Option<EmojiHit>, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            ScanError::NotUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            ScanError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !contains_emoji(&content) {
        return Ok(None);
    }

    Ok(Some(EmojiHit {
        path: path.to_path_buf(),
        lines: offending_lines(&content),
    }))
}

/// Scans files in order, writing diagnostics to `out`.
///
/// Read failures are reported and skipped. The first file containing emoji
/// is reported with its offending lines and ends the scan.
pub fn scan_paths<P, W>(paths: &[P], out: &mut W) -> io::Result<ScanOutcome>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut read_errors = 0;

    for path in paths {
        let path = path.as_ref();
        match scan_file(path) {
            Ok(None) => {
                tracing::trace!(path = %path.display(), "clean");
            }
            Ok(Some(hit)) => {
                writeln!(out, "Emoji found in: {}", hit.path.display())?;
                for (number, line) in &hit.lines {
                    writeln!(out, "  Line {number}: {line}")?;
                }
                return Ok(ScanOutcome::EmojiFound(hit));
            }
            Err(err) => {
                tracing::warn!(path = %err.path().display(), error = %err, "unreadable file");
                writeln!(out, "Error reading {}: {err}", err.path().display())?;
                read_errors += 1;
            }
        }
    }

    if read_errors > 0 {
        Ok(ScanOutcome::ReadErrors(read_errors))
    } else {
        Ok(ScanOutcome::Clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_is_clean() {
        assert!(!contains_emoji("fn main() { println!(\"hello\"); }"));
    }

    #[test]
    fn test_accented_text_is_clean() {
        assert!(!contains_emoji("Café résumé naïve"));
    }

    #[test]
    fn test_each_range_boundary_matches() {
        for (start, end) in EMOJI_RANGES {
            for cp in [*start, *end] {
                let c = char::from_u32(cp).unwrap();
                assert!(contains_emoji(&c.to_string()), "U+{cp:X} should match");
            }
        }
    }

    #[test]
    fn test_common_emoji_match() {
        assert!(contains_emoji("done \u{1F600}"));
        assert!(contains_emoji("ship it \u{1F680}"));
        assert!(contains_emoji("\u{2705} passed"));
        assert!(contains_emoji("thinking \u{1F914}"));
    }

    #[test]
    fn test_misc_symbols_block_edges() {
        // U+2713 CHECK MARK is inside the dingbats block and matches.
        assert!(contains_emoji("\u{2713}"));
        // U+2190 LEFTWARDS ARROW is outside every range.
        assert!(!contains_emoji("\u{2190}"));
    }

    #[test]
    fn test_offending_lines_are_one_indexed() {
        let text = "first\nsecond \u{1F389}\nthird\n\u{1F600} fourth";
        let lines = offending_lines(text);
        assert_eq!(
            lines,
            vec![
                (2, "second \u{1F389}".to_string()),
                (4, "\u{1F600} fourth".to_string())
            ]
        );
    }

    #[test]
    fn test_offending_lines_drop_carriage_returns() {
        let text = "one\r\ntwo \u{1F600}\r\nthree\rfour \u{1F680}\r";
        let lines = offending_lines(text);
        assert_eq!(
            lines,
            vec![
                (2, "two \u{1F600}".to_string()),
                (4, "four \u{1F680}".to_string())
            ]
        );
    }

    #[test]
    fn test_offending_lines_empty_for_clean_text() {
        assert!(offending_lines("a\nb\nc").is_empty());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ScanOutcome::Clean.exit_code(), 0);
        assert_eq!(ScanOutcome::ReadErrors(2).exit_code(), 1);
        let hit = EmojiHit {
            path: PathBuf::from("a.txt"),
            lines: vec![],
        };
        assert_eq!(ScanOutcome::EmojiFound(hit).exit_code(), 1);
    }

    #[test]
    fn test_scan_file_missing_path() {
        let err = scan_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, ScanError::Read { .. }));
        assert_eq!(err.path(), Path::new("/definitely/not/here.txt"));
    }

    #[test]
    fn test_scan_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xFF, 0xFE, 0x00, 0x80]).unwrap();

        let err = scan_file(&path).unwrap_err();
        assert!(matches!(err, ScanError::NotUtf8 { .. }));
    }

    #[test]
    fn test_scan_paths_stops_at_first_hit() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.md");
        let second = dir.path().join("second.md");
        fs::write(&first, "ok\nbad \u{1F600}\n").unwrap();
        fs::write(&second, "also bad \u{1F680}\n").unwrap();

        let mut out = Vec::new();
        let outcome = scan_paths(&[&first, &second], &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert!(matches!(outcome, ScanOutcome::EmojiFound(ref hit) if hit.path == first));
        assert!(printed.contains("first.md"));
        assert!(printed.contains("  Line 2: bad \u{1F600}"));
        assert!(!printed.contains("second.md"));
    }

    #[test]
    fn test_scan_paths_continues_after_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let clean = dir.path().join("clean.txt");
        fs::write(&clean, "nothing to see").unwrap();

        let mut out = Vec::new();
        let outcome = scan_paths(&[&missing, &clean], &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(outcome, ScanOutcome::ReadErrors(1));
        assert!(printed.starts_with("Error reading "));
        assert_eq!(printed.lines().count(), 1);
    }

    #[test]
    fn test_scan_paths_no_files() {
        let mut out = Vec::new();
        let outcome = scan_paths::<PathBuf, _>(&[], &mut out).unwrap();
        assert_eq!(outcome, ScanOutcome::Clean);
        assert!(out.is_empty());
    }
}

//! # Output Module
//!
//! This module centralizes all user-facing output for check-license-headers.
//!
//! Per-file failures go to stdout, one block per file, in a format that is
//! easy to grep in hook logs:
//!
//! ```text
//! MISSING HEADER src/app.py
//! HEADER MISMATCH scripts/run.sh
//! Copyright (c) 2020 Somebody Else
//! SKIPPING config/broken.yaml (failed to tokenize: ...)
//! ```
//!
//! Failures are printed even in quiet mode; everything else is not.

use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::report::{CheckSummary, FileReport, FileStatus, HeaderProblem};
use crate::verbose_log;

/// Header lines shown for a mismatch before the rest is truncated.
pub const MISMATCH_PREVIEW_LINES: usize = 5;

/// Terminal width assumed when printing columns.
pub const DISPLAY_WIDTH: usize = 80;

/// Print the outcome of a single file.
///
/// Valid files print nothing; ignored files are only mentioned in debug
/// mode.
pub fn print_file_report(report: &FileReport) {
  let path = report.path.display();

  match &report.status {
    FileStatus::Valid => {}
    FileStatus::Ignored(reason) => {
      verbose_log!("IGNORING {} ({})", path, reason);
    }
    FileStatus::Skipped(reason) => {
      println!(
        "{} {} ({})",
        "SKIPPING".if_supports_color(Stream::Stdout, |s| s.yellow()),
        path,
        reason
      );
    }
    FileStatus::Invalid(HeaderProblem::Missing) => {
      println!(
        "{} {}",
        "MISSING HEADER".if_supports_color(Stream::Stdout, |s| s.red()),
        path
      );
    }
    FileStatus::Invalid(HeaderProblem::Mismatch { lines }) => {
      println!(
        "{} {}",
        "HEADER MISMATCH".if_supports_color(Stream::Stdout, |s| s.red()),
        path
      );
      println!("{}", mismatch_preview(lines));
    }
  }
}

/// The found header content shown under a mismatch.
///
/// Lines are joined with spaces; long headers are cut after
/// [`MISMATCH_PREVIEW_LINES`] lines and marked `[truncated]`.
pub fn mismatch_preview(lines: &[String]) -> String {
  if lines.len() > MISMATCH_PREVIEW_LINES {
    format!("{}...\n[truncated]", lines[..MISMATCH_PREVIEW_LINES].join(" "))
  } else {
    lines.join(" ")
  }
}

/// Print the end-of-run summary requested with `--summary`.
pub fn print_summary(summary: &CheckSummary) {
  if is_quiet() {
    return;
  }

  println!();
  if !summary.skipped.is_empty() {
    println!("The following files were skipped:");
    print_paths(&summary.skipped);
    println!();
  }
  if !summary.invalid.is_empty() {
    println!("The following files have invalid license headers:");
    print_paths(&summary.invalid);
    println!();
  }

  let valid = summary.valid.len();
  let invalid = summary.invalid.len();
  let skipped = summary.skipped.len();

  println!(
    "SUMMARY: {} valid; {} invalid; {} skipped",
    valid.if_supports_color(Stream::Stdout, |s| s.green()),
    if invalid > 0 {
      invalid.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      invalid.to_string()
    },
    if skipped > 0 {
      skipped.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string()
    } else {
      skipped.to_string()
    },
  );
}

fn print_paths(paths: &[PathBuf]) {
  for path in paths {
    println!("{}", path.display());
  }
}

/// Print the compiled header pattern in debug mode.
pub fn print_pattern_debug(pattern: &str) {
  verbose_log!("\nDEBUG expected header pattern:\n{}\n", pattern);
}

/// Print a sorted list of names in columns on stdout.
pub fn print_columns(items: &[&str]) {
  for row in columnize(items, DISPLAY_WIDTH) {
    println!("{row}");
  }
}

/// Print the selected file types on stderr in debug mode.
pub fn print_file_types_debug(file_types: &[String]) {
  let mut sorted: Vec<&str> = file_types.iter().map(String::as_str).collect();
  sorted.sort_unstable();
  verbose_log!("DEBUG checking files matching any of the following:");
  for row in columnize(&sorted, DISPLAY_WIDTH) {
    verbose_log!("{}", row);
  }
}

/// Lays items out column-major in as few rows as fit within `width`.
///
/// Columns are separated by two spaces. A single item wider than `width`
/// still gets its own row.
pub fn columnize(items: &[&str], width: usize) -> Vec<String> {
  if items.is_empty() {
    return vec!["<empty>".to_string()];
  }

  let len = items.len();
  for rows in 1..=len {
    let cols = len.div_ceil(rows);
    let col_widths: Vec<usize> = (0..cols)
      .map(|c| {
        items[c * rows..len.min((c + 1) * rows)]
          .iter()
          .map(|s| s.chars().count())
          .max()
          .unwrap_or(0)
      })
      .collect();

    let total = col_widths.iter().sum::<usize>() + 2 * (cols - 1);
    if total <= width || rows == len {
      return (0..rows)
        .map(|r| {
          let cells: Vec<String> = (0..cols)
            .filter_map(|c| items.get(c * rows + r).map(|item| format!("{:<w$}", item, w = col_widths[c])))
            .collect();
          cells.join("  ").trim_end().to_string()
        })
        .collect();
    }
  }

  Vec::new()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("line {i}")).collect()
  }

  #[test]
  fn test_short_mismatch_is_not_truncated() {
    let preview = mismatch_preview(&lines(3));
    assert_eq!(preview, "line 1 line 2 line 3");
  }

  #[test]
  fn test_long_mismatch_is_truncated() {
    let preview = mismatch_preview(&lines(7));
    assert_eq!(preview, "line 1 line 2 line 3 line 4 line 5...\n[truncated]");
  }

  #[test]
  fn test_exactly_five_lines_are_shown_in_full() {
    assert!(!mismatch_preview(&lines(5)).contains("[truncated]"));
  }

  #[test]
  fn test_columnize_fits_one_row() {
    assert_eq!(columnize(&["a", "bb", "c"], 80), vec!["a  bb  c"]);
  }

  #[test]
  fn test_columnize_is_column_major() {
    let rows = columnize(&["aaaa", "bbbb", "cccc", "dddd", "eeee"], 10);
    assert_eq!(rows, vec!["aaaa  dddd", "bbbb  eeee", "cccc"]);
  }

  #[test]
  fn test_columnize_wide_item() {
    let rows = columnize(&["x".repeat(100).as_str(), "y"], 80);
    assert_eq!(rows.len(), 2);
  }

  #[test]
  fn test_columnize_empty() {
    assert_eq!(columnize(&[], 80), vec!["<empty>"]);
  }
}

//! # Report Module
//!
//! This module holds the outcome of checking each file and folds the
//! outcomes into the summary and exit code of a run.

use std::path::PathBuf;

/// Exit code when every checked file has a valid header.
pub const EXIT_OK: i32 = 0;

/// Exit code when at least one header is missing or does not match.
pub const EXIT_INVALID: i32 = 1;

/// Exit code when at least one file could not be checked. Takes precedence
/// over [`EXIT_INVALID`].
pub const EXIT_SKIPPED: i32 = 2;

/// Exit code for setup errors, such as a template needing an owner that was
/// not given.
pub const EXIT_USAGE: i32 = 255;

/// Why a header was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderProblem {
  /// The file has no leading comment content at all.
  Missing,
  /// The leading comments do not match the template. Holds the comment
  /// lines that were found.
  Mismatch { lines: Vec<String> },
}

/// Result of checking a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
  /// The header matches the template.
  Valid,
  /// The header is missing or wrong.
  Invalid(HeaderProblem),
  /// The file could not be read or tokenized.
  Skipped(String),
  /// The file was filtered out before checking and is not counted.
  Ignored(String),
}

/// A checked file and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  pub path: PathBuf,
  pub status: FileStatus,
}

impl FileReport {
  pub const fn new(path: PathBuf, status: FileStatus) -> Self {
    Self { path, status }
  }
}

/// Files of a run grouped by outcome, each list in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
  pub valid: Vec<PathBuf>,
  pub invalid: Vec<PathBuf>,
  pub skipped: Vec<PathBuf>,
}

impl CheckSummary {
  /// Adds a report to the matching list. Ignored files are dropped.
  pub fn record(&mut self, report: FileReport) {
    match report.status {
      FileStatus::Valid => self.valid.push(report.path),
      FileStatus::Invalid(_) => self.invalid.push(report.path),
      FileStatus::Skipped(_) => self.skipped.push(report.path),
      FileStatus::Ignored(_) => {}
    }
  }

  /// Builds a summary from a sequence of reports.
  pub fn from_reports(reports: impl IntoIterator<Item = FileReport>) -> Self {
    let mut summary = Self::default();
    for report in reports {
      summary.record(report);
    }
    summary
  }

  /// Process exit code for the run: skipped files win over invalid ones.
  pub fn exit_code(&self) -> i32 {
    if !self.skipped.is_empty() {
      EXIT_SKIPPED
    } else if !self.invalid.is_empty() {
      EXIT_INVALID
    } else {
      EXIT_OK
    }
  }
}

//! # Processor Module
//!
//! This module checks files against a compiled header pattern.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading
//! - [`tokenizer`] - Comment lexing and header extraction
//!
//! The [`Checker`] struct is the main entry point: it filters each path,
//! reads it, extracts its leading comment block and matches the joined
//! comment lines against the pattern.

mod file_io;
mod tokenizer;

use std::path::Path;

pub use file_io::{FileIO, ReadError, TEXT_SNIFF_LIMIT};
pub use tokenizer::{Token, TokenizeError, extract_header, tokenize};
use tracing::{debug, trace};

use crate::file_filter::{FileFilter, create_default_filter};
use crate::file_types::DEFAULT_FILE_TYPES;
use crate::report::{CheckSummary, FileReport, FileStatus, HeaderProblem};
use crate::templates::HeaderPattern;
use crate::verbose_log;

/// Configuration for creating a Checker instance.
pub struct CheckerConfig {
  pub pattern: HeaderPattern,

  /// Type tags of the files to check.
  pub file_types: Vec<String>,

  /// Glob patterns for paths that are never checked.
  pub exclude_patterns: Vec<String>,

  /// Replaces the default filter chain when set.
  pub file_filter: Option<Box<dyn FileFilter>>,
}

impl CheckerConfig {
  /// Creates a CheckerConfig that checks the default file types.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// CheckerConfig {
  ///     file_types: vec!["yaml".to_string()],
  ///     ..CheckerConfig::new(pattern)
  /// }
  /// ```
  pub fn new(pattern: HeaderPattern) -> Self {
    Self {
      pattern,
      file_types: DEFAULT_FILE_TYPES.iter().map(|t| t.to_string()).collect(),
      exclude_patterns: Vec::new(),
      file_filter: None,
    }
  }
}

/// Checks files for a license header matching a pattern.
pub struct Checker {
  pattern: HeaderPattern,
  file_filter: Box<dyn FileFilter>,
}

impl Checker {
  /// Creates a new checker.
  ///
  /// # Errors
  ///
  /// Returns an error if any exclude pattern is invalid.
  pub fn new(config: CheckerConfig) -> anyhow::Result<Self> {
    let file_filter = match config.file_filter {
      Some(filter) => filter,
      None => Box::new(create_default_filter(&config.exclude_patterns, config.file_types)?),
    };

    Ok(Self {
      pattern: config.pattern,
      file_filter,
    })
  }

  /// Checks the header of already loaded source text.
  pub fn check_source(&self, source: &str) -> FileStatus {
    let lines = match extract_header(source) {
      Ok(lines) => lines,
      Err(e) => return FileStatus::Skipped(format!("failed to tokenize: {e}")),
    };

    verbose_log!("DEBUG found {} header content lines", lines.len());

    if lines.is_empty() {
      return FileStatus::Invalid(HeaderProblem::Missing);
    }

    let content = lines.join(" ");
    trace!(content = %content, "joined header content");

    if self.pattern.is_match(&content) {
      FileStatus::Valid
    } else {
      FileStatus::Invalid(HeaderProblem::Mismatch { lines })
    }
  }

  /// Filters, reads and checks a single file.
  ///
  /// Never fails: problems reading a file are reported as
  /// [`FileStatus::Skipped`].
  pub fn check_file(&self, path: &Path) -> FileReport {
    let status = self.file_status(path);
    debug!(path = %path.display(), status = ?status, "checked file");
    FileReport::new(path.to_path_buf(), status)
  }

  fn file_status(&self, path: &Path) -> FileStatus {
    match self.file_filter.should_process(path) {
      Ok(result) if !result.should_process => {
        return FileStatus::Ignored(result.reason.unwrap_or_default());
      }
      Ok(_) => {}
      Err(e) => return FileStatus::Skipped(format!("{e:#}")),
    }

    verbose_log!("DEBUG checking {}", path.display());

    match FileIO::read_source(path) {
      Ok(source) => self.check_source(&source),
      Err(e) => FileStatus::Skipped(e.to_string()),
    }
  }

  /// Checks every path in order and folds the reports into a summary.
  pub fn check_all<P: AsRef<Path>>(&self, paths: &[P]) -> CheckSummary {
    CheckSummary::from_reports(paths.iter().map(|p| self.check_file(p.as_ref())))
  }
}

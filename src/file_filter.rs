//! # File Filter Module
//!
//! This module decides which of the paths handed to the tool are checked at
//! all. Paths rejected here are neither valid, invalid nor skipped; they are
//! only mentioned in debug output.

use std::path::Path;

use anyhow::{Context, Result};

use crate::file_types::{FileClassifier, TEXT, TagClassifier};

/// Result of a file filtering operation.
#[derive(Debug)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  ///
  /// # Returns
  ///
  /// A `FilterResult` indicating whether the file should be processed and why
  /// not if applicable. An error means the file could not be inspected.
  fn should_process(&self, path: &Path) -> Result<FilterResult>;
}

/// Drops directories, missing paths and other non-regular files.
pub struct RegularFileFilter;

impl FileFilter for RegularFileFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    if path.is_file() {
      Ok(FilterResult::process())
    } else {
      Ok(FilterResult::skip("not a regular file"))
    }
  }
}

/// Filter that excludes files matching glob patterns.
pub struct ExcludeFilter {
  patterns: Vec<glob::Pattern>,
}

impl ExcludeFilter {
  /// Creates a new ExcludeFilter from a list of glob patterns.
  ///
  /// # Errors
  ///
  /// Returns an error if any pattern is not a valid glob.
  pub fn from_patterns(patterns: &[String]) -> Result<Self> {
    let patterns = patterns
      .iter()
      .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { patterns })
  }

  fn matching_pattern(&self, path: &Path) -> Option<&glob::Pattern> {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let trimmed = path_str.strip_prefix("./").unwrap_or(&path_str);

    self
      .patterns
      .iter()
      .find(|pattern| pattern.matches(trimmed) || pattern.matches(&path_str))
  }
}

impl FileFilter for ExcludeFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    match self.matching_pattern(path) {
      Some(pattern) => Ok(FilterResult::skip(format!("matches exclude pattern '{pattern}'"))),
      None => Ok(FilterResult::process()),
    }
  }
}

/// Keeps text files carrying at least one of the selected type tags.
pub struct FileTypeFilter {
  file_types: Vec<String>,
  classifier: Box<dyn FileClassifier>,
}

impl FileTypeFilter {
  /// Creates a filter using the built-in [`TagClassifier`].
  pub fn new(file_types: Vec<String>) -> Self {
    Self::with_classifier(file_types, Box::new(TagClassifier))
  }

  /// Creates a filter with a custom classifier.
  pub fn with_classifier(file_types: Vec<String>, classifier: Box<dyn FileClassifier>) -> Self {
    Self { file_types, classifier }
  }
}

impl FileFilter for FileTypeFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    let tags = self.classifier.tags(path)?;

    if !tags.contains(TEXT) {
      return Ok(FilterResult::skip("not a text file"));
    }

    if !self.file_types.iter().any(|t| tags.contains(t.as_str())) {
      let found: Vec<_> = tags.into_iter().collect();
      return Ok(FilterResult::skip(format!(
        "wrong file type; types found: {}",
        found.join(", ")
      )));
    }

    Ok(FilterResult::process())
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    for filter in &self.filters {
      let result = filter.should_process(path)?;
      if !result.should_process {
        return Ok(result);
      }
    }
    Ok(FilterResult::process())
  }
}

/// Builds the standard filter chain: regular files only, then exclude
/// patterns, then file types.
///
/// # Errors
///
/// Returns an error if any exclude pattern is invalid.
pub fn create_default_filter(exclude_patterns: &[String], file_types: Vec<String>) -> Result<CompositeFilter> {
  let filters: Vec<Box<dyn FileFilter>> = vec![
    Box::new(RegularFileFilter),
    Box::new(ExcludeFilter::from_patterns(exclude_patterns)?),
    Box::new(FileTypeFilter::new(file_types)),
  ];
  Ok(CompositeFilter::new(filters))
}

//! # File I/O Module
//!
//! This module provides the file reading used while checking headers.

use std::io::Read as _;
use std::path::Path;

/// Number of bytes inspected when deciding whether a file is text.
pub const TEXT_SNIFF_LIMIT: usize = 1024;

/// A file that could not be turned into source text.
///
/// These are not fatal to a run: the file is reported as skipped.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
  #[error("failed to read: {0}")]
  Io(#[from] std::io::Error),

  #[error("not valid UTF-8 at byte {valid_up_to}")]
  InvalidUtf8 { valid_up_to: usize },
}

/// File I/O operations for the checker.
pub struct FileIO;

impl FileIO {
  /// Reads up to `limit` bytes from the start of a file.
  pub fn read_prefix(path: &Path, limit: usize) -> std::io::Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    let mut buf = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
  }

  /// Reads a whole file as UTF-8 source text.
  ///
  /// # Errors
  ///
  /// Returns [`ReadError::Io`] if the file cannot be read and
  /// [`ReadError::InvalidUtf8`] if its content is not UTF-8.
  pub fn read_source(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8 {
      valid_up_to: e.utf8_error().valid_up_to(),
    })
  }
}

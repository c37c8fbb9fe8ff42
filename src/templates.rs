//! # Templates Module
//!
//! This module turns a license header template into the pattern a file's
//! header must match.
//!
//! Templates are plain text with two placeholders:
//! - `[OWNER]` is replaced by the copyright owner given on the command line
//! - `[YEARS]` matches a year, a year range, or a list of them (`2019`,
//!   `2019-2021`, `2019, 2021-2023`)
//!
//! Comment markers are not part of the template: headers are compared after
//! the comment characters have been stripped and the lines joined with single
//! spaces, so the template is normalized the same way.
//!
//! ## Example
//!
//! ```rust
//! use check_license_headers::templates::HeaderTemplate;
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = HeaderTemplate::new("Copyright (c) [YEARS] [OWNER]\nAll rights reserved.");
//! let pattern = template.compile(Some("Example Corp"))?;
//!
//! assert!(pattern.is_match("Copyright (c) 2019-2021 Example Corp All rights reserved."));
//! assert!(!pattern.is_match("Copyright (c) 2021 Someone Else All rights reserved."));
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::verbose_log;

/// Placeholder replaced by the copyright owner.
pub const OWNER_KEY: &str = "[OWNER]";

/// Placeholder replaced by [`YEARS_PATTERN`].
pub const YEARS_KEY: &str = "[YEARS]";

/// Matches `2019`, `2019-2021` and comma separated lists like `2019, 2021-2022`.
pub const YEARS_PATTERN: &str = r"\d{4}(?:-\d{4}|, \d{4})*";

/// Template used when neither `--template` nor `--template-file` is given.
pub const DEFAULT_HEADER_TEMPLATE: &str = "Copyright (c) [YEARS] [OWNER]
Use of this source code is governed by a BSD-3-clause license that can
be found in the LICENSE file or at https://opensource.org/licenses/BSD-3-Clause
";

/// Errors raised while compiling a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  /// The template references the owner but none was supplied.
  #[error("template has '[OWNER]', but '--owner' not provided")]
  MissingOwner,

  /// The compiled pattern was rejected by the regex engine.
  #[error("failed to compile header pattern: {0}")]
  InvalidPattern(#[from] regex::Error),
}

/// A license header template before placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  text: String,
}

impl Default for HeaderTemplate {
  fn default() -> Self {
    Self::new(DEFAULT_HEADER_TEMPLATE)
  }
}

impl HeaderTemplate {
  /// Creates a template from its raw text.
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Loads a template from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or is not valid UTF-8.
  pub fn load(path: &Path) -> Result<Self> {
    verbose_log!("DEBUG loading template from {}", path.display());

    let text =
      fs::read_to_string(path).with_context(|| format!("Failed to read template file: {}", path.display()))?;

    Ok(Self::new(text))
  }

  /// The raw template text.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Whether the template contains the `[OWNER]` placeholder.
  pub fn requires_owner(&self) -> bool {
    self.text.contains(OWNER_KEY)
  }

  /// Whether the template contains the `[YEARS]` placeholder.
  pub fn has_years(&self) -> bool {
    self.text.contains(YEARS_KEY)
  }

  /// Trims every line and joins the non-blank ones with a single space.
  pub fn normalized(&self) -> String {
    self
      .text
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// Compiles the template into an anchored header pattern.
  ///
  /// The template text is matched literally except for the placeholders.
  /// The owner is matched literally as well.
  ///
  /// # Errors
  ///
  /// Returns [`TemplateError::MissingOwner`] if the template contains
  /// `[OWNER]` and `owner` is `None` or empty.
  pub fn compile(&self, owner: Option<&str>) -> Result<HeaderPattern, TemplateError> {
    let owner = owner.filter(|o| !o.is_empty());
    let mut pattern = regex::escape(&self.normalized());
    let mut owner_ignored = false;

    if self.requires_owner() {
      let owner = owner.ok_or(TemplateError::MissingOwner)?;
      pattern = pattern.replace(&regex::escape(OWNER_KEY), &regex::escape(owner));
    } else if owner.is_some() {
      owner_ignored = true;
    }

    if self.has_years() {
      pattern = pattern.replace(&regex::escape(YEARS_KEY), YEARS_PATTERN);
    }

    debug!(pattern = %pattern, "compiled header pattern");

    let regex = Regex::new(&format!("^(?:{pattern})$"))?;

    Ok(HeaderPattern {
      source: pattern,
      regex,
      owner_ignored,
    })
  }
}

/// A compiled header pattern. Matching is always a full match.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
  source: String,
  regex: Regex,
  owner_ignored: bool,
}

impl HeaderPattern {
  /// Returns `true` if the whole of `content` matches the pattern.
  pub fn is_match(&self, content: &str) -> bool {
    self.regex.is_match(content)
  }

  /// The pattern text without the anchors, for debug output.
  pub fn as_str(&self) -> &str {
    &self.source
  }

  /// Set when an owner was supplied but the template has no `[OWNER]`.
  pub const fn owner_ignored(&self) -> bool {
    self.owner_ignored
  }
}

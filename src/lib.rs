//! # check-license-headers
//!
//! A pre-commit style lint that checks source files begin with a license
//! header matching a configurable template.
//!
//! Checking a file happens in four steps:
//!
//! * the file is classified by type and filtered ([`file_types`],
//!   [`file_filter`])
//! * its leading comment block is extracted with a small tokenizer
//!   ([`processor`])
//! * the comment lines, joined with spaces, are matched against a pattern
//!   compiled from the template ([`templates`])
//! * the per-file results are folded into an exit code ([`report`])
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use check_license_headers::processor::{Checker, CheckerConfig};
//! use check_license_headers::templates::HeaderTemplate;
//!
//! fn main() -> anyhow::Result<()> {
//!     let pattern = HeaderTemplate::default().compile(Some("Example Corp"))?;
//!     let checker = Checker::new(CheckerConfig::new(pattern))?;
//!
//!     let summary = checker.check_all(&["setup.py", "scripts/release.sh"]);
//!
//!     std::process::exit(summary.exit_code());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod file_filter;
pub mod file_types;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;

//! # Check Command
//!
//! This module implements the header check: it merges command line and
//! config file settings, compiles the template, checks every file and turns
//! the results into an exit code.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::PossibleValuesParser;
use tracing::debug;

use crate::config::{Config, load_config};
use crate::file_types::{DEFAULT_FILE_TYPES, all_text_file_types};
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, print_error, print_warning, set_quiet, set_verbose};
use crate::output::{print_columns, print_file_report, print_file_types_debug, print_pattern_debug, print_summary};
use crate::processor::{Checker, CheckerConfig};
use crate::report::{CheckSummary, EXIT_OK, EXIT_USAGE};
use crate::templates::{HeaderTemplate, OWNER_KEY, TemplateError};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Files to check. Directories and missing paths are ignored.
  #[arg(value_name = "FILE")]
  pub files: Vec<PathBuf>,

  /// Header template text; [OWNER] and [YEARS] are placeholders
  /// [default: BSD-3-Clause header]
  #[arg(long, short = 't', conflicts_with = "template_file")]
  pub template: Option<String>,

  /// Read the header template from a file
  #[arg(long, value_name = "FILE")]
  pub template_file: Option<PathBuf>,

  /// Copyright owner substituted for [OWNER]
  #[arg(long, short = 'o', value_name = "COPYRIGHT_OWNER")]
  pub owner: Option<String>,

  /// File type to check; may be specified multiple times (see
  /// --list-file-types)
  #[arg(
    long = "file-type",
    short = 'f',
    value_name = "FILE_TYPE",
    value_parser = PossibleValuesParser::new(all_text_file_types()),
    hide_possible_values = true
  )]
  pub file_types: Vec<String>,

  /// Glob pattern for paths that are never checked (repeatable)
  #[arg(long, short = 'e', value_name = "GLOB")]
  pub exclude: Vec<String>,

  /// Print a summary after checking the files
  #[arg(long, short = 's')]
  pub summary: bool,

  /// List all text file types and exit
  #[arg(long)]
  pub list_file_types: bool,

  /// Print debug output to stderr
  #[arg(long, short = 'd', visible_alias = "verbose")]
  pub debug: bool,

  /// Only print files that fail the check
  #[arg(long, short = 'q', conflicts_with = "debug")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Path to config file (default: .license-headers.toml in the current
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,
}

/// Effective settings after merging the command line over the config file.
#[derive(Debug)]
struct Settings {
  files: Vec<PathBuf>,
  template: HeaderTemplate,
  owner: Option<String>,
  file_types: Vec<String>,
  exclude: Vec<String>,
  summary: bool,
}

impl Settings {
  /// Command line values win; lists given on the command line replace the
  /// config lists instead of extending them.
  fn resolve(args: CheckArgs, config: Config) -> Result<Self> {
    let template = match (args.template, args.template_file, config.template, config.template_file) {
      (Some(text), _, _, _) => HeaderTemplate::new(text),
      (None, Some(path), _, _) => HeaderTemplate::load(&path)?,
      (None, None, Some(text), _) => HeaderTemplate::new(text),
      (None, None, None, Some(path)) => HeaderTemplate::load(&path)?,
      (None, None, None, None) => HeaderTemplate::default(),
    };

    let file_types = if !args.file_types.is_empty() {
      args.file_types
    } else if !config.file_types.is_empty() {
      config.file_types
    } else {
      DEFAULT_FILE_TYPES.iter().map(|t| t.to_string()).collect()
    };

    let exclude = if args.exclude.is_empty() {
      config.exclude
    } else {
      args.exclude
    };

    Ok(Self {
      files: args.files,
      template,
      owner: args.owner.or(config.owner),
      file_types,
      exclude,
      summary: args.summary || config.summary,
    })
  }
}

/// Run the check command with the given arguments.
///
/// # Returns
///
/// The process exit code, see [`CheckSummary::exit_code`]. Setup problems
/// that have a dedicated message (missing owner) return [`EXIT_USAGE`];
/// other setup problems are returned as errors.
pub fn run_check(args: CheckArgs) -> Result<i32> {
  init_tracing(args.quiet, args.debug);

  if args.debug {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if args.list_file_types {
    print_columns(&all_text_file_types());
    return Ok(EXIT_OK);
  }

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?.unwrap_or_default();
  let settings = Settings::resolve(args, config)?;
  debug!(?settings, "resolved settings");

  print_file_types_debug(&settings.file_types);

  let pattern = match settings.template.compile(settings.owner.as_deref()) {
    Ok(pattern) => pattern,
    Err(e @ TemplateError::MissingOwner) => {
      print_error(&e.to_string());
      return Ok(EXIT_USAGE);
    }
    Err(e) => return Err(e.into()),
  };

  if settings.files.is_empty() {
    info_log!("No files provided");
    return Ok(EXIT_OK);
  }

  if pattern.owner_ignored() {
    print_warning(&format!(
      "'--owner' will be ignored (template is missing '{OWNER_KEY}')"
    ));
  }
  print_pattern_debug(pattern.as_str());

  let checker = Checker::new(CheckerConfig {
    file_types: settings.file_types,
    exclude_patterns: settings.exclude,
    ..CheckerConfig::new(pattern)
  })?;

  let mut summary = CheckSummary::default();
  for path in &settings.files {
    let report = checker.check_file(path);
    print_file_report(&report);
    summary.record(report);
  }

  if settings.summary {
    print_summary(&summary);
  }

  Ok(summary.exit_code())
}

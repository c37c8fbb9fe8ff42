//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod check;

pub use check::{CheckArgs, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "check-license-headers",
  version,
  about = "Checks if file headers match a provided template.",
  styles = CUSTOM_STYLES,
  after_help = "Template placeholders:
  [OWNER]  replaced by --owner
  [YEARS]  matches 2021, 2019-2021 or 2019, 2021-2022

Exit codes:
  0    all checked files have a valid header
  1    at least one header is missing or does not match
  2    at least one file could not be tokenized or read
  255  setup error (e.g. template needs --owner)

Examples:
  # Check Python files with the default BSD-3-Clause template
  check-license-headers --owner \"Example Corp\" src/*.py

  # Use a custom template and print a summary
  check-license-headers --template-file header.txt --summary setup.py

  # Only check YAML files, skipping vendored ones
  check-license-headers -o \"Example Corp\" -f yaml --exclude \"vendor/**\" $(git ls-files)
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

//! # check-license-headers
//!
//! Checks that source files begin with a license header matching a template.

use std::process;

use check_license_headers::cli::{Cli, run_check};
use check_license_headers::logging::print_error;
use check_license_headers::report::EXIT_USAGE;

fn main() {
  let cli = Cli::parse_args();

  let code = match run_check(cli.check_args) {
    Ok(code) => code,
    Err(e) => {
      print_error(&format!("{e:#}"));
      EXIT_USAGE
    }
  };

  process::exit(code);
}

//! # Logging Module
//!
//! This module provides logging utilities for check-license-headers,
//! including:
//! - Debug logging that can be enabled/disabled with `--debug`
//! - Standard info logging with color support
//! - A `tracing` subscriber for internal diagnostics
//!
//! Debug logs go to stderr and info logs go to stdout, so the per-file results
//! printed on stdout stay easy to pipe.
//!
//! ## Example
//!
//! ```rust
//! use check_license_headers::logging::{ColorMode, set_verbose};
//! use check_license_headers::{info_log, verbose_log};
//!
//! // Enable debug logging
//! set_verbose();
//!
//! // Let owo-colors decide based on the terminal
//! ColorMode::Auto.apply();
//!
//! // Log a debug message (goes to stderr)
//! verbose_log!("DEBUG checking {}", "setup.py");
//!
//! // Log an info message (goes to stdout)
//! info_log!("No files provided");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if debug mode is enabled.
///
/// This macro is used for detailed logging that is only shown when debug mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// It uses the same format string syntax as the standard [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message, highlighted when colors are enabled.
///
/// Used by the [`info_log!`] macro.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}

/// Prints a warning to stderr. Warnings are shown even in quiet mode.
pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    "WARNING".if_supports_color(Stream::Stderr, |m| m.yellow()),
    message
  );
}

/// Prints an error to stderr.
pub fn print_error(message: &str) {
  eprintln!("{} {}", "ERROR".if_supports_color(Stream::Stderr, |m| m.red()), message);
}

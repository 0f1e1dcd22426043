//! CLI module for `attributes-lint`
//!
//! Runs the hard-deprecation lint over files or directories and reports findings with `miette`.
//!
//! ## Usage
//!
//! - `attributes-lint` - lint `src/`
//! - `attributes-lint <PATH>...` - lint the given `.rs` files and directories
//! - `attributes-lint --deny-advisories` - also fail on soft deprecations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Lint findings that fail the run.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The lint could not run (unreadable or unparsable input).
    pub const ERROR: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Fail when code references a hard-deprecated member
#[derive(Parser, Debug)]
#[command(name = "attributes-lint")]
#[command(version = VERSION)]
#[command(about = "Fail when code references a hard-deprecated member", long_about = None)]
pub struct Cli {
    /// Files or directories to lint (default: src)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Treat soft-deprecation advisories as failures
    #[arg(long)]
    pub deny_advisories: bool,
}

/// Resolved lint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    pub paths: Vec<PathBuf>,
    pub deny_advisories: bool,
}

impl From<Cli> for LintConfig {
    fn from(cli: Cli) -> Self {
        let paths = if cli.paths.is_empty() {
            vec![PathBuf::from("src")]
        } else {
            cli.paths
        };
        Self {
            paths,
            deny_advisories: cli.deny_advisories,
        }
    }
}

/// Main entry point for the CLI.
pub fn run() {
    let config = LintConfig::from(Cli::parse());

    match commands::lint(&config, &mut std::io::stderr()) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_src() {
        let cli = Cli::try_parse_from(["attributes-lint"]).unwrap();
        let config = LintConfig::from(cli);
        assert_eq!(config.paths, vec![PathBuf::from("src")]);
        assert!(!config.deny_advisories);
    }

    #[test]
    fn explicit_paths_and_flag() {
        let cli = Cli::try_parse_from(["attributes-lint", "a.rs", "lib", "--deny-advisories"]).unwrap();
        let config = LintConfig::from(cli);
        assert_eq!(config.paths, vec![PathBuf::from("a.rs"), PathBuf::from("lib")]);
        assert!(config.deny_advisories);
    }
}

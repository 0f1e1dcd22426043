//! Command implementations for the CLI

use std::io::Write;

use attributes_syntax::lint_paths;
use tracing::info;

use super::{CliError, CliResult, ExitCode, LintConfig};

/// Lint `config.paths`, rendering findings to `diag`.
///
/// ## Returns
/// - `ExitCode::SUCCESS` when nothing fails the run.
/// - `ExitCode::FAILURE` on hard-deprecation errors, or advisories with `deny_advisories`.
///
/// ## Errors
/// - `ExitCode::ERROR` when a path cannot be read or parsed.
pub fn lint<W: Write>(config: &LintConfig, diag: &mut W) -> CliResult<ExitCode> {
    let report = lint_paths(&config.paths).map_err(|e| {
        CliError::new(format!("{:?}", miette::Report::new(e)), ExitCode::ERROR)
    })?;
    let (errors, advisories) = (report.errors.len(), report.advisories.len());
    info!(errors, advisories, "lint finished");

    let write_err = |e: std::io::Error| CliError::failure(format!("failed to write diagnostics: {e}"));
    for advisory in &report.advisories {
        writeln!(diag, "warning: {advisory}").map_err(write_err)?;
    }
    for error in report.errors {
        writeln!(diag, "{:?}", miette::Report::new(error)).map_err(write_err)?;
    }

    if errors > 0 || (config.deny_advisories && advisories > 0) {
        writeln!(
            diag,
            "attributes-lint: {errors} error(s), {advisories} advisory(ies)"
        )
        .map_err(write_err)?;
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

//! Demo entry point: prints the introspection trace to stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use attributes_example::DemoError;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    match print_trace() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}

fn print_trace() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    attributes_example::report::run(&mut out)?;
    out.flush()?;
    Ok(())
}

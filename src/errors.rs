//! Errors surfaced by the demo trace.

use miette::Diagnostic;
use thiserror::Error;

use attributes_core::NotFoundError;

#[derive(Debug, Error, Diagnostic)]
pub enum DemoError {
    #[error("failed to write output")]
    #[diagnostic(code(attributes::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(attributes::not_found), help("register the type in `registry::registry()`"))]
    NotFound(#[from] NotFoundError),
}

impl DemoError {
    /// The reader of stdout went away, e.g. `attributes_example | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

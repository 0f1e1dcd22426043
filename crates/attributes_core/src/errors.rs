//! Errors raised by the query engine.

use thiserror::Error;

/// `describe` was asked for a type that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no descriptor registered for type `{type_name}`")]
pub struct NotFoundError {
    pub type_name: String,
}

impl NotFoundError {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

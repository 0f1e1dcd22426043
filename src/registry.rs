//! Process-wide descriptor registry.
//!
//! Populated once on first use and read-only afterwards.

use std::sync::OnceLock;

use attributes_core::{EntityDescriptor, NotFoundError, Registry};

use crate::animal::Animal;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Return the registry, building it on first call.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let registry = Registry::new().register::<Animal>();
        tracing::debug!(types = registry.len(), "descriptor registry initialised");
        registry
    })
}

/// Resolve a described type by fully-qualified name or bare identifier.
pub fn describe(type_name: &str) -> Result<&'static EntityDescriptor, NotFoundError> {
    registry().describe(type_name)
}

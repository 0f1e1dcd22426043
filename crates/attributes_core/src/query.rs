//! Metadata query engine.
//!
//! [`Registry`] resolves type names to descriptors; the free functions answer per-descriptor and per-member
//! questions. Only [`Registry::describe`] can fail; the rest are total.
//!
//! ## Notes
//! - Lookups are linear scans. Schemas here are a handful of members, so there is no index.

use tracing::{debug, trace};

use crate::descriptor::{Described, EntityDescriptor, Member, MemberKind};
use crate::errors::NotFoundError;
use crate::tags::{CustomTag, DeprecatedTag, MetadataTag, TagKind};

/// Explicitly populated set of descriptors.
///
/// ## Examples
/// ```rust,ignore
/// let registry = Registry::new().register::<Animal>();
/// let animal = registry.describe("Animal")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<EntityDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the descriptor of `T`. Registering the same type twice keeps the first entry.
    pub fn register<T: Described>(self) -> Self {
        self.register_descriptor(T::descriptor())
    }

    /// Add a hand-built descriptor.
    pub fn register_descriptor(mut self, descriptor: EntityDescriptor) -> Self {
        if self.entries.iter().any(|d| d.type_name == descriptor.type_name) {
            trace!(type_name = descriptor.type_name, "descriptor already registered");
            return self;
        }
        debug!(
            type_name = descriptor.type_name,
            fields = descriptor.fields.len(),
            methods = descriptor.methods.len(),
            "registered descriptor"
        );
        self.entries.push(descriptor);
        self
    }

    /// Resolve a descriptor by fully-qualified type name or bare identifier.
    ///
    /// ## Errors
    /// - [`NotFoundError`] if no registered type matches `type_name`.
    ///
    /// ## Notes
    /// - A fully-qualified match wins over an identifier match.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn describe(&self, type_name: &str) -> Result<&EntityDescriptor, NotFoundError> {
        self.entries
            .iter()
            .find(|d| d.type_name == type_name)
            .or_else(|| self.entries.iter().find(|d| d.ident == type_name))
            .ok_or_else(|| NotFoundError::new(type_name))
    }

    /// Iterate registered descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Return the members of `kind` in declaration order. Empty when there are none.
pub fn members_of(descriptor: &EntityDescriptor, kind: MemberKind) -> &'static [Member] {
    match kind {
        MemberKind::Field => descriptor.fields,
        MemberKind::Method => descriptor.methods,
    }
}

/// Filter a member's tags to `kind`, preserving attachment order.
pub fn tags_of(member: &Member, kind: TagKind) -> impl Iterator<Item = &'static MetadataTag> {
    member.tags.iter().filter(move |tag| tag.kind() == kind)
}

/// Custom tags attached to `member`.
pub fn custom_tags(member: &Member) -> impl Iterator<Item = &'static CustomTag> {
    member.tags.iter().filter_map(MetadataTag::as_custom)
}

/// Deprecation tags attached to `member`.
pub fn deprecations(member: &Member) -> impl Iterator<Item = &'static DeprecatedTag> {
    member.tags.iter().filter_map(MetadataTag::as_deprecated)
}

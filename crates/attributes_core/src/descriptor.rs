//! Static descriptors for tagged types.
//!
//! `#[derive(Described)]` implements [`DescribedFields`] and `#[described_methods]` implements
//! [`DescribedMethods`]. A type with both gets [`Described`] through the blanket impl below.
//!
//! ## Notes
//! - Every table is `&'static`: descriptors are fixed when the program is built and never change.

use crate::tags::MetadataTag;

/// Whether a [`Member`] is a field or a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
}

/// One field or method of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    /// Display name after the container's rename rule (e.g. `EatOld`).
    pub name: &'static str,
    /// The Rust identifier as declared (e.g. `eat_old`).
    pub ident: &'static str,
    pub kind: MemberKind,
    /// Attached tags in declaration order.
    pub tags: &'static [MetadataTag],
}

/// The shape of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Fully qualified name, e.g. `attributes_example::animal::Animal`.
    pub type_name: &'static str,
    /// Bare type name, e.g. `Animal`.
    pub ident: &'static str,
    /// Tags attached to the type itself.
    pub tags: &'static [MetadataTag],
    pub fields: &'static [Member],
    pub methods: &'static [Member],
}

impl EntityDescriptor {
    /// Iterate all members: fields first, then methods, each in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &'static Member> {
        self.fields.iter().chain(self.methods.iter())
    }

    /// Find a member by display name or Rust identifier.
    pub fn member(&self, name: &str) -> Option<&'static Member> {
        self.members().find(|m| m.name == name || m.ident == name)
    }
}

impl std::fmt::Display for EntityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Field-level metadata. Implemented by `#[derive(Described)]`.
pub trait DescribedFields {
    const TYPE_NAME: &'static str;
    const IDENT: &'static str;
    const TYPE_TAGS: &'static [MetadataTag];
    const FIELDS: &'static [Member];
}

/// Method-level metadata. Implemented by `#[described_methods]`.
pub trait DescribedMethods {
    const METHODS: &'static [Member];
}

/// A type whose full descriptor is available without an instance.
pub trait Described {
    fn descriptor() -> EntityDescriptor;
}

impl<T: DescribedFields + DescribedMethods> Described for T {
    fn descriptor() -> EntityDescriptor {
        EntityDescriptor {
            type_name: T::TYPE_NAME,
            ident: T::IDENT,
            tags: T::TYPE_TAGS,
            fields: T::FIELDS,
            methods: T::METHODS,
        }
    }
}

//! Metadata tags, static type descriptors, and the query engine that reads them.
//!
//! This crate is intentionally small and dependency-light. Everything a descriptor holds is `'static` and `Copy`,
//! so the tables generated by `attributes_derive` can live in `const` items and be shared freely.
//!
//! ## Notes
//!
//! - No IO and no global state: the process-wide registry lives in the application crate.
//! - Metadata belongs to a type, never to an instance. Nothing here takes `&self` of an entity.
//!
//! ## Examples
//! ```rust
//! use attributes_core::{CustomTag, EntityDescriptor, Member, MemberKind, MetadataTag, TagKind, query};
//!
//! const FIELDS: &[Member] = &[Member {
//!     name: "Name",
//!     ident: "name",
//!     kind: MemberKind::Field,
//!     tags: &[MetadataTag::Custom(CustomTag { label: "Accessor", description: "The name" })],
//! }];
//! const PET: EntityDescriptor = EntityDescriptor {
//!     type_name: "zoo::Pet",
//!     ident: "Pet",
//!     tags: &[],
//!     fields: FIELDS,
//!     methods: &[],
//! };
//!
//! let field = &query::members_of(&PET, MemberKind::Field)[0];
//! assert_eq!(query::tags_of(field, TagKind::Custom).count(), 1);
//! assert!(query::members_of(&PET, MemberKind::Method).is_empty());
//! ```

pub mod descriptor;
pub mod errors;
pub mod query;
pub mod tags;

pub use descriptor::{Described, DescribedFields, DescribedMethods, EntityDescriptor, Member, MemberKind};
pub use errors::NotFoundError;
pub use query::Registry;
pub use tags::{CustomTag, DeprecatedTag, MetadataTag, TagKind};

#![forbid(unsafe_code)]
//! Metadata attributes and static introspection.
//!
//! An [`Animal`] carries `#[custom]` tags on its fields and a hard `#[obsolete]` tag on `eat_old`. The derive and
//! attribute macros turn those attributes into `const` descriptor tables; [`registry`] resolves descriptors by
//! name and [`report`] walks them to print the trace.
//!
//! ## Hard deprecation
//!
//! rustc treats `#[deprecated]` as a warning. Members tagged `#[obsolete(error = true)]` are enforced by the
//! lint in `attributes_syntax::lint`: `build.rs` runs it over `src/` and fails the build on any reference, and the
//! `attributes-lint` binary runs it over arbitrary paths.
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` with `?`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod animal;
pub mod cli;
pub mod errors;
pub mod registry;
pub mod report;

pub use animal::Animal;
pub use attributes_core::{
    CustomTag, DeprecatedTag, Described, EntityDescriptor, Member, MemberKind, MetadataTag, NotFoundError, TagKind,
    query,
};
pub use attributes_derive::{Described, described_methods};
pub use errors::DemoError;

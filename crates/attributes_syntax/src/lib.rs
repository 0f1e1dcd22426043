//! Attribute syntax shared by `attributes_derive` and the build-time lint.
//!
//! This crate is the only place that knows how `#[custom]`, `#[obsolete]` and `#[deprecated]` are spelled and what
//! their arguments mean. The derive crate turns parsed specs into `const` descriptor tables; the lint uses the same
//! specs to find hard-deprecated methods and the call sites that reference them.
//!
//! ## Examples
//! ```rust
//! use attributes_syntax::lint::Linter;
//!
//! let mut linter = Linter::new();
//! linter
//!     .add_source(
//!         "pet.rs",
//!         r#"
//!         #[described_methods]
//!         impl Pet {
//!             #[obsolete(note = "use walk", error = true)]
//!             pub fn stroll(&self) {}
//!         }
//!         fn main() { Pet.stroll(); }
//!         "#,
//!     )
//!     .unwrap();
//! assert_eq!(linter.run().errors.len(), 1);
//! ```

pub mod attrs;
pub mod lint;
pub mod rename;

pub use attrs::{ContainerOptions, CustomSpec, DeprecationSpec, TagSpec};
pub use lint::{Advisory, HardDeprecationError, LintError, LintReport, Linter, lint_package, lint_paths};
pub use rename::RenameRule;

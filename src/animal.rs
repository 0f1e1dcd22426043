//! The tagged record type.
//!
//! Both fields carry an `Accessor` tag and `eat_old` is hard-deprecated. All of it is fixed when the crate is built:
//! mutating an `Animal` never changes what [`Animal::descriptor`](attributes_core::Described::descriptor) reports.

use std::io::{self, Write};

use attributes_derive::{Described, described_methods};

/// A pet with a name and an age.
///
/// ```
/// use attributes_example::Animal;
///
/// let mut pet = Animal::new("Ella", 3);
/// pet.set_name("Buddy");
///
/// let mut out = Vec::new();
/// pet.eat(&mut out).unwrap();
/// assert_eq!(out, b"Buddy eats\n");
/// ```
///
/// `eat_old` is hard-deprecated. `build.rs` fails the build when any target of this package references it.
/// Other crates see the generated `#[deprecated]`, which is an error wherever `deprecated` is denied:
///
/// ```compile_fail
/// #![deny(deprecated)]
/// use attributes_example::Animal;
///
/// let pet = Animal::new("Ella", 3);
/// pet.eat_old(&mut std::io::stdout()).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Described)]
#[described(rename_all = "PascalCase")]
pub struct Animal {
    #[custom(label = "Accessor", description = "Sets / Gets the name of the animal")]
    name: String,
    #[custom(label = "Accessor", description = "Sets / Gets the age of the animal")]
    age: i32,
}

#[described_methods(rename_all = "PascalCase")]
impl Animal {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    #[obsolete(note = "Do not use, use the new implementation instead", error = true)]
    pub fn eat_old<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "The animal eats")
    }

    pub fn eat<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} eats", self.name)
    }
}

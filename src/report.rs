//! The console trace.
//!
//! Builds one [`Animal`], exercises its accessors and `eat`, then walks the registered descriptor twice: once for
//! custom tags on fields, once for deprecation tags on methods. Every line goes to the caller's writer in the
//! order the operations run.

use std::io::Write;

use attributes_core::query;
use attributes_core::{EntityDescriptor, MemberKind};

use crate::animal::Animal;
use crate::errors::DemoError;
use crate::registry;

/// Write the full trace to `out`.
#[tracing::instrument(skip_all)]
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut pet = Animal::new("Ella", 3);
    writeln!(out, "{}", pet.name())?;
    writeln!(out, "{}", pet.age())?;

    pet.set_name("Buddy");
    writeln!(out, "{}", pet.name())?;

    pet.eat(out)?;

    let descriptor = registry::describe("Animal")?;
    writeln!(out, "{descriptor}")?;
    write_custom_tags(out, descriptor)?;
    write_deprecations(out, descriptor)?;
    Ok(())
}

/// For every custom tag on every field: field name, label, description.
pub fn write_custom_tags<W: Write>(out: &mut W, descriptor: &EntityDescriptor) -> std::io::Result<()> {
    for field in query::members_of(descriptor, MemberKind::Field) {
        for tag in query::custom_tags(field) {
            writeln!(out, "{}", field.name)?;
            writeln!(out, "{}", tag.label)?;
            writeln!(out, "{}", tag.description)?;
        }
    }
    Ok(())
}

/// For every deprecation tag on every method: method name, message, hard-error flag.
pub fn write_deprecations<W: Write>(out: &mut W, descriptor: &EntityDescriptor) -> std::io::Result<()> {
    for method in query::members_of(descriptor, MemberKind::Method) {
        for tag in query::deprecations(method) {
            writeln!(out, "{}", method.name)?;
            writeln!(out, "{}", tag.message)?;
            writeln!(out, "{}", flag(tag.is_hard_error))?;
        }
    }
    Ok(())
}

fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_capitalised() {
        assert_eq!(flag(true), "True");
        assert_eq!(flag(false), "False");
    }
}

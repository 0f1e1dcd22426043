//! Property-based tests for instance state versus type metadata
//!
//! Metadata belongs to the type: no sequence of mutations on an instance may change what the descriptor reports.

use attributes_example::{Animal, Described};
use proptest::prelude::*;

proptest! {
    /// Property: renaming is visible on read and leaves every tag untouched
    #[test]
    fn mutation_never_changes_metadata(
        first in "\\PC*",
        renames in prop::collection::vec("\\PC*", 0..8),
        age in any::<i32>(),
    ) {
        let before = Animal::descriptor();
        let mut pet = Animal::new(first.clone(), age);
        prop_assert_eq!(pet.name(), first.as_str());

        for name in &renames {
            pet.set_name(name.clone());
            prop_assert_eq!(pet.name(), name.as_str());
            prop_assert_eq!(Animal::descriptor(), before);
        }
        prop_assert_eq!(pet.age(), age);
    }

    /// Property: `eat` always reports the current name
    #[test]
    fn eat_reports_current_name(name in "[A-Za-z ]{0,24}", age in 0i32..40) {
        let mut pet = Animal::new("placeholder", age);
        pet.set_name(name.clone());

        let mut out = Vec::new();
        pet.eat(&mut out).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), format!("{name} eats\n"));
    }
}

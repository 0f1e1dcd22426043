//! Call-site detection for the hard-deprecation lint.

use attributes_syntax::lint::{LintReport, Linter};

const PET: &str = r#"
#[derive(Described)]
pub struct Pet {
    name: String,
}

#[described_methods(rename_all = "PascalCase")]
impl Pet {
    #[obsolete(note = "Do not use, use the new implementation instead", error = true)]
    pub fn eat_old(&self) {}

    #[obsolete(note = "prefer walk")]
    pub fn stroll(&self) {}

    pub fn eat(&self) {}
}
"#;

fn lint(call_site: &str) -> LintReport {
    let mut linter = Linter::new();
    linter.add_source("src/pet.rs", PET).unwrap();
    linter.add_source("src/main.rs", call_site).unwrap();
    linter.run()
}

#[test]
fn non_deprecated_call_is_clean() {
    let report = lint("fn main() { let pet = Pet::new(); pet.eat(); }");
    assert!(report.is_clean());
}

#[test]
fn definition_alone_is_not_a_reference() {
    let mut linter = Linter::new();
    linter.add_source("src/pet.rs", PET).unwrap();
    assert!(linter.run().is_clean());
}

#[test]
fn hard_deprecated_method_call_is_an_error() {
    let report = lint("fn main() {\n    let pet = Pet::new();\n    pet.eat_old();\n}\n");

    assert_eq!(report.errors.len(), 1);
    let err = &report.errors[0];
    assert_eq!(err.owner, "Pet");
    assert_eq!(err.method, "eat_old");
    assert_eq!(err.message, "Do not use, use the new implementation instead");
    assert_eq!((err.line, err.column), (3, 8));
    assert_eq!(err.path.to_str(), Some("src/main.rs"));
    insta::assert_snapshot!(
        err.to_string(),
        @"use of hard-deprecated method `Pet::eat_old`: Do not use, use the new implementation instead"
    );
}

#[test]
fn hard_deprecated_path_reference_is_an_error() {
    let report = lint("fn main() { let f = Pet::eat_old; f(&Pet::new()); }");
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn self_path_reference_is_an_error() {
    let report = lint("impl Pet { fn twice(&self) { Self::eat_old(self); } }");
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn other_type_path_with_same_method_name_is_ignored() {
    let report = lint("fn main() { Cat::eat_old(&Cat); }");
    assert!(report.is_clean());
}

#[test]
fn reference_inside_macro_arguments_is_an_error() {
    let report = lint(r#"fn main() { println!("{:?}", pet.eat_old()); }"#);
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn qualified_self_path_is_an_error() {
    let report = lint("fn main() { <Pet>::eat_old(&pet); }");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].column, 19);
}

#[test]
fn qualified_self_path_through_trait_is_an_error() {
    let report = lint("fn main() { <Pet as Feed>::eat_old(&pet); }");
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn qualified_self_path_on_other_type_is_ignored() {
    let report = lint("fn main() { <Cat>::eat_old(&cat); }");
    assert!(report.is_clean());
}

#[test]
fn reference_inside_structured_log_fields_is_an_error() {
    let report = lint(r#"fn main() { tracing::info!(fed = ?pet.eat_old(), "fed"); }"#);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].method, "eat_old");
}

#[test]
fn path_reference_inside_unparsable_macro_body_is_an_error() {
    let report = lint(r#"fn main() { tracing::debug!(target: "pets", "{:?}", Pet::eat_old(&pet)); }"#);
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn unparsable_macro_body_with_other_owner_is_ignored() {
    let report = lint(r#"fn main() { tracing::debug!(target: "pets", "{:?}", Cat::eat_old(&cat)); }"#);
    assert!(report.is_clean());
}

#[test]
fn lint_package_covers_integration_tests() {
    let root = std::env::temp_dir().join(format!("attributes_package_{}", std::process::id()));
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::create_dir_all(root.join("tests")).unwrap();
    std::fs::write(root.join("src/pet.rs"), PET).unwrap();
    std::fs::write(root.join("tests/feeding.rs"), "#[test]\nfn feeds() { Pet.eat_old(); }\n").unwrap();

    let dirs = attributes_syntax::lint::package_dirs(&root);
    let report = attributes_syntax::lint_package(&root).unwrap();
    std::fs::remove_dir_all(&root).unwrap();

    assert_eq!(dirs, [root.join("src"), root.join("tests")]);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].path.ends_with("tests/feeding.rs"));
}

#[test]
fn soft_deprecated_call_is_an_advisory() {
    let report = lint("fn main() { pet.stroll(); }");

    assert!(!report.has_errors());
    assert_eq!(report.advisories.len(), 1);
    insta::assert_snapshot!(
        report.advisories[0].to_string(),
        @"src/main.rs:1:17: use of deprecated method `Pet::stroll`: prefer walk"
    );
}

#[test]
fn lint_paths_walks_directories() {
    let dir = std::env::temp_dir().join(format!("attributes_lint_{}", std::process::id()));
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("pet.rs"), PET).unwrap();
    std::fs::write(dir.join("nested/use.rs"), "fn f(p: &Pet) { p.eat_old(); }").unwrap();
    std::fs::write(dir.join("notes.txt"), "p.eat_old()").unwrap();

    let report = attributes_syntax::lint_paths(&[dir.clone()]).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].path.ends_with("nested/use.rs"));
}

#[test]
fn missing_path_is_an_io_error() {
    let err = attributes_syntax::lint_paths(&[std::path::PathBuf::from("does/not/exist.rs")]).unwrap_err();
    assert!(err.to_string().starts_with("failed to read does/not/exist.rs"));
}

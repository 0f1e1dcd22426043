//! Refuse to build when any target of this package references a hard-deprecated member.
//!
//! rustc only warns on `#[deprecated]`; members tagged `#[obsolete(error = true)]` must not be reachable at all.
//! Every existing target directory (`src/`, `tests/`, `benches/`) is linted as one unit.

use std::env;
use std::path::PathBuf;
use std::process;

use attributes_syntax::lint::package_dirs;
use attributes_syntax::lint_paths;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let root = env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let dirs = package_dirs(&root);
    for dir in &dirs {
        println!("cargo:rerun-if-changed={}", dir.display());
    }

    let report = match lint_paths(&dirs) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            process::exit(1);
        }
    };

    for advisory in &report.advisories {
        println!("cargo:warning={advisory}");
    }

    if report.has_errors() {
        let count = report.errors.len();
        for error in report.errors {
            eprintln!("{:?}", miette::Report::new(error));
        }
        eprintln!("error: {count} reference(s) to hard-deprecated members");
        process::exit(1);
    }
}

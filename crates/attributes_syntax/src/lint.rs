//! Hard-deprecation lint.
//!
//! Members tagged `#[obsolete(error = true)]` must be unreachable. rustc only knows `#[deprecated]` as a
//! warning, so this pass enforces the hard case before the program can run:
//!
//! 1. collect deprecated methods from every `#[described_methods]` impl block in the scanned files;
//! 2. visit every expression and report references to them. Macro arguments are parsed as expressions when they
//!    can be; otherwise their tokens are scanned for `.method` and `Owner::method`.
//!
//! References to hard-deprecated methods become [`HardDeprecationError`]s; references to soft ones become
//! [`Advisory`]s.
//!
//! ## Notes
//! - There is no type information here. Method calls match by name alone; paths match `Owner::method`,
//!   `<Owner>::method` or `Self::method`.
//! - `build.rs` runs this over every target directory of the package (see [`lint_package`]) and fails the
//!   build on any error.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use proc_macro2::{Span, TokenStream, TokenTree};
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use syn::{Expr, ExprMethodCall, ExprPath, ImplItem, ItemImpl, Macro, Token, Type};
use thiserror::Error;
use tracing::{debug, trace};

use crate::attrs::{self, DEPRECATED_ATTR, OBSOLETE_ATTR};

/// A method found deprecated in pass 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedMethod {
    /// Type the impl block is for, e.g. `Animal`.
    pub owner: String,
    pub method: String,
    pub message: String,
    pub is_hard_error: bool,
}

/// A reference to a hard-deprecated member.
#[derive(Debug, Error, Diagnostic)]
#[error("use of hard-deprecated method `{owner}::{method}`: {message}")]
#[diagnostic(
    code(attributes::hard_deprecation),
    help("`{method}` is tagged `error = true` and may not be referenced; call its replacement instead")
)]
pub struct HardDeprecationError {
    pub owner: String,
    pub method: String,
    pub message: String,
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("referenced here")]
    pub span: SourceSpan,
}

/// A reference to a soft-deprecated member. Permitted, but reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub owner: String,
    pub method: String,
    pub message: String,
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: use of deprecated method `{}::{}`",
            self.path.display(),
            self.line,
            self.column + 1,
            self.owner,
            self.method
        )?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

/// Failure to read or parse a file. Distinct from lint findings.
#[derive(Debug, Error, Diagnostic)]
pub enum LintError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
}

/// Findings of one lint run, in file order then source order.
#[derive(Debug, Default)]
pub struct LintReport {
    pub errors: Vec<HardDeprecationError>,
    pub advisories: Vec<Advisory>,
}

impl LintReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.advisories.is_empty()
    }
}

struct SourceFile {
    path: PathBuf,
    source: String,
    ast: syn::File,
}

/// Two-pass linter over a set of Rust source files.
#[derive(Default)]
pub struct Linter {
    files: Vec<SourceFile>,
    deprecated: Vec<DeprecatedMethod>,
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one in-memory source file and collect its deprecated methods.
    pub fn add_source(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> Result<(), LintError> {
        let path = path.into();
        let source = source.into();
        let ast = syn::parse_file(&source).map_err(|source| LintError::Parse {
            path: path.clone(),
            source,
        })?;

        let mut collector = DeprecationCollector::default();
        collector.visit_file(&ast);
        debug!(path = %path.display(), found = collector.found.len(), "collected deprecated methods");
        self.deprecated.extend(collector.found);
        self.files.push(SourceFile { path, source, ast });
        Ok(())
    }

    /// Add a `.rs` file, or every `.rs` file under a directory (sorted, recursive).
    pub fn add_path(&mut self, path: &Path) -> Result<(), LintError> {
        let io_err = |source: std::io::Error| LintError::Io {
            path: path.to_path_buf(),
            source,
        };
        if path.is_dir() {
            let mut entries = fs::read_dir(path)
                .map_err(io_err)?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(io_err)?;
            entries.sort();
            for entry in entries {
                if entry.is_dir() || entry.extension().is_some_and(|ext| ext == "rs") {
                    self.add_path(&entry)?;
                }
            }
            Ok(())
        } else {
            let source = fs::read_to_string(path).map_err(io_err)?;
            self.add_source(path, source)
        }
    }

    /// Deprecated methods collected so far.
    pub fn deprecated(&self) -> &[DeprecatedMethod] {
        &self.deprecated
    }

    /// Run pass 2 over every added file.
    #[tracing::instrument(skip_all, fields(files = self.files.len(), deprecated = self.deprecated.len()))]
    pub fn run(&self) -> LintReport {
        let mut report = LintReport::default();
        if self.deprecated.is_empty() {
            return report;
        }

        for file in &self.files {
            let mut visitor = CallSiteVisitor {
                deprecated: &self.deprecated,
                hits: Vec::new(),
            };
            visitor.visit_file(&file.ast);

            for (target, span) in visitor.hits {
                let start = span.start();
                let (line, column) = (start.line, start.column);
                trace!(path = %file.path.display(), line, column, method = %target.method, "deprecated reference");
                if target.is_hard_error {
                    let offset = byte_offset(&file.source, line, column);
                    report.errors.push(HardDeprecationError {
                        owner: target.owner.clone(),
                        method: target.method.clone(),
                        message: target.message.clone(),
                        path: file.path.clone(),
                        line,
                        column,
                        src: NamedSource::new(file.path.display().to_string(), file.source.clone()),
                        span: (offset, target.method.len()).into(),
                    });
                } else {
                    report.advisories.push(Advisory {
                        owner: target.owner.clone(),
                        method: target.method.clone(),
                        message: target.message.clone(),
                        path: file.path.clone(),
                        line,
                        column,
                    });
                }
            }
        }
        report
    }
}

/// Lint every path (files or directories) as one unit.
pub fn lint_paths(paths: &[PathBuf]) -> Result<LintReport, LintError> {
    let mut linter = Linter::new();
    for path in paths {
        linter.add_path(path)?;
    }
    Ok(linter.run())
}

/// Package directories whose sources compile into some target.
///
/// `examples/` is left out: this package declares no example targets (`autoexamples = false`).
pub const TARGET_DIRS: &[&str] = &["src", "tests", "benches"];

/// The [`TARGET_DIRS`] that exist under `root`.
pub fn package_dirs(root: &Path) -> Vec<PathBuf> {
    TARGET_DIRS
        .iter()
        .map(|dir| root.join(dir))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// Lint every target directory of the package at `root` as one unit.
pub fn lint_package(root: &Path) -> Result<LintReport, LintError> {
    lint_paths(&package_dirs(root))
}

#[derive(Default)]
struct DeprecationCollector {
    found: Vec<DeprecatedMethod>,
}

impl DeprecationCollector {
    fn collect(&mut self, owner: &str, items: &[ImplItem]) {
        for item in items {
            let ImplItem::Fn(func) = item else { continue };
            for attr in &func.attrs {
                // Malformed attributes are reported by the macro at compile time.
                let spec = if attr.path().is_ident(OBSOLETE_ATTR) {
                    attrs::parse_obsolete(attr).ok()
                } else if attr.path().is_ident(DEPRECATED_ATTR) {
                    attrs::parse_native_deprecated(attr).ok()
                } else {
                    None
                };
                if let Some(spec) = spec {
                    self.found.push(DeprecatedMethod {
                        owner: owner.to_string(),
                        method: func.sig.ident.to_string(),
                        message: spec.message,
                        is_hard_error: spec.is_hard_error,
                    });
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for DeprecationCollector {
    fn visit_item_impl(&mut self, node: &'ast ItemImpl) {
        if node.attrs.iter().any(attrs::is_methods_attr) {
            if let Some(owner) = type_ident(&node.self_ty) {
                self.collect(&owner, &node.items);
            }
        }
        visit::visit_item_impl(self, node);
    }
}

struct CallSiteVisitor<'a> {
    deprecated: &'a [DeprecatedMethod],
    hits: Vec<(&'a DeprecatedMethod, Span)>,
}

impl<'a> CallSiteVisitor<'a> {
    fn strongest(&self, matches: impl Fn(&DeprecatedMethod) -> bool) -> Option<&'a DeprecatedMethod> {
        let mut candidates = self.deprecated.iter().filter(|d| matches(d));
        let first = candidates.next()?;
        Some(candidates.find(|d| d.is_hard_error).unwrap_or(first))
    }
}

impl<'ast> Visit<'ast> for CallSiteVisitor<'_> {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        if let Some(target) = self.strongest(|d| node.method == d.method) {
            self.hits.push((target, node.method.span()));
        }
        visit::visit_expr_method_call(self, node);
    }

    fn visit_expr_path(&mut self, node: &'ast ExprPath) {
        let segments: Vec<_> = node.path.segments.iter().collect();
        let hit = match &node.qself {
            // `<Owner>::method` or `<Owner as Trait>::method`
            Some(qself) if qself.position + 1 == segments.len() => {
                let owner = type_ident(&qself.ty);
                let method = segments[qself.position];
                owner.and_then(|owner| {
                    self.strongest(|d| method.ident == d.method && (owner == d.owner || owner == "Self"))
                        .map(|target| (target, method.ident.span()))
                })
            }
            Some(_) => None,
            None => match segments.as_slice() {
                [.., owner, method] => self
                    .strongest(|d| method.ident == d.method && (owner.ident == d.owner || owner.ident == "Self"))
                    .map(|target| (target, method.ident.span())),
                _ => None,
            },
        };
        if let Some(hit) = hit {
            self.hits.push(hit);
        }
        visit::visit_expr_path(self, node);
    }

    fn visit_macro(&mut self, node: &'ast Macro) {
        // Macro bodies are opaque to `syn`; re-parse the common `name!(expr, expr, ...)` shape.
        match node.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            Ok(args) => {
                let mut nested = CallSiteVisitor {
                    deprecated: self.deprecated,
                    hits: Vec::new(),
                };
                for arg in &args {
                    nested.visit_expr(arg);
                }
                self.hits.extend(nested.hits);
            }
            Err(_) => self.scan_tokens(node.tokens.clone()),
        }
        visit::visit_macro(self, node);
    }
}

impl CallSiteVisitor<'_> {
    /// Token-level fallback for macro bodies that are not plain expressions, e.g.
    /// `info!(fed = ?pet.eat_old(), "...")`. Flags an ident after `.`, or after `Owner::`.
    fn scan_tokens(&mut self, tokens: TokenStream) {
        let tokens: Vec<TokenTree> = tokens.into_iter().collect();
        for (i, token) in tokens.iter().enumerate() {
            let ident = match token {
                TokenTree::Group(group) => {
                    self.scan_tokens(group.stream());
                    continue;
                }
                TokenTree::Ident(ident) => ident,
                _ => continue,
            };

            let before = |back: usize| i.checked_sub(back).map(|at| &tokens[at]);
            let hit = if is_punct(before(1), '.') {
                self.strongest(|d| ident == d.method.as_str())
            } else if is_punct(before(1), ':') && is_punct(before(2), ':') {
                let owner = match before(3) {
                    Some(TokenTree::Ident(owner)) => Some(owner),
                    _ => None,
                };
                self.strongest(|d| {
                    ident == d.method.as_str()
                        && owner.is_none_or(|owner| owner == d.owner.as_str() || owner == "Self")
                })
            } else {
                None
            };
            if let Some(target) = hit {
                self.hits.push((target, ident.span()));
            }
        }
    }
}

fn is_punct(token: Option<&TokenTree>, ch: char) -> bool {
    matches!(token, Some(TokenTree::Punct(p)) if p.as_char() == ch)
}

fn type_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(p) => p.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Convert a 1-based line and 0-based char column into a byte offset.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = &source[line_start..];
    let within = rest
        .char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    line_start + within
}

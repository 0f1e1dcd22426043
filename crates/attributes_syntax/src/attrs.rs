//! Parsing of the metadata attributes.
//!
//! Both `attributes_derive` (to generate descriptor tables) and the lint (to learn which methods are
//! deprecated) read attributes through this module, so the two can never disagree about what a tag says.
//!
//! Recognised spellings:
//! - `#[custom(label = "...", description = "...")]`
//! - `#[obsolete(note = "...", error = true)]` (`message` is accepted for `note`; a bare `error` means `true`)
//! - native `#[deprecated]`, `#[deprecated = "..."]`, `#[deprecated(note = "...", since = "...")]`
//! - container options: `#[described(rename_all = "PascalCase")]` or `#[described_methods(rename_all = ...)]`

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, Lit, LitBool, LitStr, Meta, Token};

use crate::rename::RenameRule;

pub const CUSTOM_ATTR: &str = "custom";
pub const OBSOLETE_ATTR: &str = "obsolete";
pub const DEPRECATED_ATTR: &str = "deprecated";
pub const CONTAINER_ATTR: &str = "described";
pub const METHODS_ATTR: &str = "described_methods";

/// Parsed `#[custom(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSpec {
    pub label: String,
    pub description: String,
}

/// Parsed `#[obsolete(...)]` or `#[deprecated(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationSpec {
    pub message: String,
    pub is_hard_error: bool,
    /// Came from the native `#[deprecated]`, which stays on the item as written.
    pub native: bool,
}

/// One tag in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSpec {
    Custom(CustomSpec),
    Deprecated(DeprecationSpec),
}

/// Options set on a described type or impl block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerOptions {
    pub rename_all: RenameRule,
}

impl ContainerOptions {
    /// Read all `#[described(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(CONTAINER_ATTR)) {
            attr.parse_nested_meta(|meta| options.parse_meta(meta))?;
        }
        Ok(options)
    }

    /// Accept one `key = value` entry. Usable with `syn::meta::parser` for attribute-macro arguments.
    pub fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename_all") {
            let lit: LitStr = meta.value()?.parse()?;
            self.rename_all = lit
                .value()
                .parse()
                .map_err(|e| syn::Error::new(lit.span(), e))?;
            Ok(())
        } else {
            Err(meta.error("unsupported option; expected `rename_all`"))
        }
    }
}

/// Whether `attr` is one this crate consumes and the macro must strip.
pub fn is_metadata_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(CUSTOM_ATTR) || attr.path().is_ident(OBSOLETE_ATTR)
}

/// Whether `attr` is `#[described_methods]`, written bare or through a path.
pub fn is_methods_attr(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|seg| seg.ident == METHODS_ATTR)
}

/// Tags on a struct or one of its fields. `#[obsolete]` belongs on methods only.
pub fn field_tags(attrs: &[Attribute]) -> syn::Result<Vec<TagSpec>> {
    if let Some(attr) = attrs.iter().find(|a| a.path().is_ident(OBSOLETE_ATTR)) {
        return Err(syn::Error::new_spanned(
            attr,
            "`#[obsolete]` applies to methods of a `#[described_methods]` impl; use `#[deprecated]` on types and fields",
        ));
    }
    member_tags(attrs)
}

/// Collect every tag in `attrs`, preserving declaration order.
pub fn member_tags(attrs: &[Attribute]) -> syn::Result<Vec<TagSpec>> {
    let mut tags = Vec::new();
    for attr in attrs {
        if attr.path().is_ident(CUSTOM_ATTR) {
            tags.push(TagSpec::Custom(parse_custom(attr)?));
        } else if attr.path().is_ident(OBSOLETE_ATTR) {
            tags.push(TagSpec::Deprecated(parse_obsolete(attr)?));
        } else if attr.path().is_ident(DEPRECATED_ATTR) {
            tags.push(TagSpec::Deprecated(parse_native_deprecated(attr)?));
        }
    }
    Ok(tags)
}

pub fn parse_custom(attr: &Attribute) -> syn::Result<CustomSpec> {
    let mut label = None;
    let mut description = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("label") {
            label = Some(meta.value()?.parse::<LitStr>()?.value());
        } else if meta.path.is_ident("description") {
            description = Some(meta.value()?.parse::<LitStr>()?.value());
        } else {
            return Err(meta.error("unsupported `custom` key; expected `label` or `description`"));
        }
        Ok(())
    })?;

    let label = label.ok_or_else(|| syn::Error::new_spanned(attr, "`custom` requires `label = \"...\"`"))?;
    let description =
        description.ok_or_else(|| syn::Error::new_spanned(attr, "`custom` requires `description = \"...\"`"))?;
    Ok(CustomSpec { label, description })
}

pub fn parse_obsolete(attr: &Attribute) -> syn::Result<DeprecationSpec> {
    let mut spec = DeprecationSpec {
        message: String::new(),
        is_hard_error: false,
        native: false,
    };
    if let Meta::Path(_) = attr.meta {
        return Ok(spec);
    }
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("note") || meta.path.is_ident("message") {
            spec.message = meta.value()?.parse::<LitStr>()?.value();
        } else if meta.path.is_ident("error") {
            spec.is_hard_error = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitBool>()?.value
            } else {
                true
            };
        } else {
            return Err(meta.error("unsupported `obsolete` key; expected `note` or `error`"));
        }
        Ok(())
    })?;
    Ok(spec)
}

pub fn parse_native_deprecated(attr: &Attribute) -> syn::Result<DeprecationSpec> {
    let mut spec = DeprecationSpec {
        message: String::new(),
        is_hard_error: false,
        native: true,
    };
    match &attr.meta {
        Meta::Path(_) => {}
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => spec.message = s.value(),
            other => return Err(syn::Error::new_spanned(other, "expected a string literal")),
        },
        Meta::List(_) => attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("note") {
                spec.message = meta.value()?.parse::<LitStr>()?.value();
            } else if meta.path.is_ident("since") {
                meta.value()?.parse::<LitStr>()?;
            } else {
                return Err(meta.error("unsupported `deprecated` key; expected `note` or `since`"));
            }
            Ok(())
        })?,
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn custom_reads_label_and_description() {
        let attr: Attribute = parse_quote!(#[custom(label = "Accessor", description = "Sets / Gets the name")]);
        assert_eq!(
            parse_custom(&attr).unwrap(),
            CustomSpec {
                label: "Accessor".into(),
                description: "Sets / Gets the name".into(),
            }
        );
    }

    #[test]
    fn field_tags_reject_obsolete() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[custom(label = "Accessor", description = "The size")]),
            parse_quote!(#[obsolete(note = "use capacity")]),
        ];
        let err = field_tags(&attrs).unwrap_err();
        assert!(err.to_string().contains("use `#[deprecated]`"));
        assert_eq!(member_tags(&attrs).unwrap().len(), 2);
    }

    #[test]
    fn field_tags_accept_native_deprecated() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[deprecated(note = "use capacity")])];
        let tags = field_tags(&attrs).unwrap();
        assert!(matches!(&tags[..], [TagSpec::Deprecated(d)] if d.native && d.message == "use capacity"));
    }

    #[test]
    fn custom_requires_both_keys() {
        let attr: Attribute = parse_quote!(#[custom(label = "Accessor")]);
        let err = parse_custom(&attr).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn custom_rejects_unknown_key() {
        let attr: Attribute = parse_quote!(#[custom(label = "a", description = "b", colour = "red")]);
        assert!(parse_custom(&attr).is_err());
    }

    #[test]
    fn obsolete_error_forms() {
        let hard: Attribute = parse_quote!(#[obsolete(note = "gone", error = true)]);
        let bare: Attribute = parse_quote!(#[obsolete(message = "gone", error)]);
        let soft: Attribute = parse_quote!(#[obsolete(note = "gone")]);
        let empty: Attribute = parse_quote!(#[obsolete]);

        assert!(parse_obsolete(&hard).unwrap().is_hard_error);
        assert!(parse_obsolete(&bare).unwrap().is_hard_error);
        assert_eq!(parse_obsolete(&bare).unwrap().message, "gone");
        assert!(!parse_obsolete(&soft).unwrap().is_hard_error);
        assert_eq!(parse_obsolete(&empty).unwrap().message, "");
    }

    #[test]
    fn native_deprecated_forms_are_soft() {
        let path: Attribute = parse_quote!(#[deprecated]);
        let name_value: Attribute = parse_quote!(#[deprecated = "old"]);
        let list: Attribute = parse_quote!(#[deprecated(since = "0.2.0", note = "older")]);

        assert_eq!(parse_native_deprecated(&path).unwrap().message, "");
        assert_eq!(parse_native_deprecated(&name_value).unwrap().message, "old");
        let spec = parse_native_deprecated(&list).unwrap();
        assert_eq!(spec.message, "older");
        assert!(spec.native);
        assert!(!spec.is_hard_error);
    }

    #[test]
    fn member_tags_keep_order_and_skip_other_attrs() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[doc = "docs"]),
            parse_quote!(#[custom(label = "A", description = "first")]),
            parse_quote!(#[obsolete(note = "x", error = false)]),
            parse_quote!(#[custom(label = "B", description = "second")]),
        ];
        let tags = member_tags(&attrs).unwrap();
        assert_eq!(tags.len(), 3);
        assert!(matches!(&tags[0], TagSpec::Custom(c) if c.label == "A"));
        assert!(matches!(&tags[1], TagSpec::Deprecated(d) if !d.is_hard_error));
        assert!(matches!(&tags[2], TagSpec::Custom(c) if c.label == "B"));
    }

    #[test]
    fn container_options_rename_all() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[described(rename_all = "PascalCase")])];
        assert_eq!(
            ContainerOptions::from_attrs(&attrs).unwrap().rename_all,
            RenameRule::PascalCase
        );

        let bad: Vec<Attribute> = vec![parse_quote!(#[described(rename_all = "Title Case")])];
        assert!(ContainerOptions::from_attrs(&bad).is_err());
    }

    #[test]
    fn methods_attr_matches_qualified_path() {
        let bare: Attribute = parse_quote!(#[described_methods]);
        let qualified: Attribute = parse_quote!(#[attributes_example::described_methods(rename_all = "camelCase")]);
        let other: Attribute = parse_quote!(#[inline]);

        assert!(is_methods_attr(&bare));
        assert!(is_methods_attr(&qualified));
        assert!(!is_methods_attr(&other));
    }
}

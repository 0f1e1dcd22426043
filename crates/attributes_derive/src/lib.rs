//! Macros that turn metadata attributes into static descriptor tables.
//!
//! - `#[derive(Described)]`: implements `attributes_core::DescribedFields` for a struct with named fields.
//! - `#[described_methods]`: implements `attributes_core::DescribedMethods` for an inherent impl block.
//!
//! A type with both gets `attributes_core::Described` and can be registered for introspection.
//! Attribute spellings are parsed by `attributes_syntax`, the same code the hard-deprecation lint uses.

use attributes_syntax::attrs::{self, CustomSpec, DeprecationSpec, OBSOLETE_ATTR, TagSpec};
use attributes_syntax::{ContainerOptions, RenameRule};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, ImplItem, ItemImpl, parse_macro_input, parse_quote};

/// Generates the field table and type-level tags for a struct.
///
/// # Example
/// ```ignore
/// #[derive(Described)]
/// #[described(rename_all = "PascalCase")]
/// struct Animal {
///     #[custom(label = "Accessor", description = "Sets / Gets the name of the animal")]
///     name: String,
/// }
///
/// // Generates:
/// impl ::attributes_core::DescribedFields for Animal {
///     const TYPE_NAME: &'static str = concat!(module_path!(), "::", "Animal");
///     const IDENT: &'static str = "Animal";
///     const TYPE_TAGS: &'static [MetadataTag] = &[];
///     const FIELDS: &'static [Member] = &[Member { name: "Name", ident: "name", kind: MemberKind::Field, tags: &[..] }];
/// }
/// ```
// `obsolete` is a helper only so the derive can reject it with its own error.
#[proc_macro_derive(Described, attributes(custom, described, obsolete))]
pub fn derive_described(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_described(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates the method table for an inherent impl block.
///
/// Every associated fn becomes a method member. On each fn, `#[custom(...)]` and `#[obsolete(...)]` are consumed;
/// `#[obsolete]` is replaced with a native `#[deprecated(note = ...)]` so rustc reports uses as well. A native
/// `#[deprecated]` is recorded as a soft deprecation and left in place.
///
/// # Example
/// ```ignore
/// #[described_methods(rename_all = "PascalCase")]
/// impl Animal {
///     #[obsolete(note = "Do not use, use the new implementation instead", error = true)]
///     pub fn eat_old(&self) {}
/// }
/// ```
#[proc_macro_attribute]
pub fn described_methods(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut options = ContainerOptions::default();
    let parser = syn::meta::parser(|meta| options.parse_meta(meta));
    parse_macro_input!(args with parser);
    let mut item = parse_macro_input!(item as ItemImpl);

    expand_methods(options, &mut item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_described(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.unraw().to_string();
    let options = ContainerOptions::from_attrs(&input.attrs)?;
    let type_tags = tag_tokens(&attrs::field_tags(&input.attrs)?);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(name, "`Described` requires named fields")),
        },
        _ => return Err(syn::Error::new_spanned(name, "`Described` can only be derived for structs")),
    };

    let members = fields
        .iter()
        .filter_map(|f| f.ident.as_ref().map(|ident| (ident, &f.attrs)))
        .map(|(ident, field_attrs)| {
            let tags = attrs::field_tags(field_attrs)?;
            Ok(member_tokens(
                ident,
                quote!(::attributes_core::MemberKind::Field),
                &tags,
                options.rename_all,
            ))
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::attributes_core::DescribedFields for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = ::core::concat!(::core::module_path!(), "::", #name_str);
            const IDENT: &'static str = #name_str;
            const TYPE_TAGS: &'static [::attributes_core::MetadataTag] = &[#(#type_tags),*];
            const FIELDS: &'static [::attributes_core::Member] = &[#(#members),*];
        }
    })
}

fn expand_methods(options: ContainerOptions, item: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`described_methods` applies to inherent impl blocks only",
        ));
    }

    let mut members = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(func) = impl_item else { continue };
        let tags = attrs::member_tags(&func.attrs)?;
        let deprecations = tags.iter().filter(|t| matches!(t, TagSpec::Deprecated(_))).count();
        if deprecations > 1 {
            return Err(syn::Error::new_spanned(
                &func.sig.ident,
                "a method can carry at most one `obsolete`/`deprecated` attribute",
            ));
        }
        members.push(member_tokens(
            &func.sig.ident,
            quote!(::attributes_core::MemberKind::Method),
            &tags,
            options.rename_all,
        ));
        rewrite_method_attrs(&mut func.attrs)?;
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    Ok(quote! {
        #item

        impl #impl_generics ::attributes_core::DescribedMethods for #self_ty #where_clause {
            const METHODS: &'static [::attributes_core::Member] = &[#(#members),*];
        }
    })
}

/// Strip consumed attributes; `#[obsolete]` becomes `#[deprecated]`.
fn rewrite_method_attrs(fn_attrs: &mut Vec<Attribute>) -> syn::Result<()> {
    let replacement = fn_attrs
        .iter()
        .find(|a| a.path().is_ident(OBSOLETE_ATTR))
        .map(attrs::parse_obsolete)
        .transpose()?;
    fn_attrs.retain(|a| !attrs::is_metadata_attr(a));
    if let Some(DeprecationSpec { message, .. }) = replacement {
        fn_attrs.push(parse_quote!(#[deprecated(note = #message)]));
    }
    Ok(())
}

fn member_tokens(ident: &Ident, kind: TokenStream2, tags: &[TagSpec], rename: RenameRule) -> TokenStream2 {
    let raw = ident.unraw().to_string();
    let name = rename.apply(&raw);
    let tags = tag_tokens(tags);
    quote! {
        ::attributes_core::Member {
            name: #name,
            ident: #raw,
            kind: #kind,
            tags: &[#(#tags),*],
        }
    }
}

fn tag_tokens(tags: &[TagSpec]) -> Vec<TokenStream2> {
    tags.iter()
        .map(|tag| match tag {
            TagSpec::Custom(CustomSpec { label, description }) => quote! {
                ::attributes_core::MetadataTag::Custom(::attributes_core::CustomTag {
                    label: #label,
                    description: #description,
                })
            },
            TagSpec::Deprecated(DeprecationSpec {
                message, is_hard_error, ..
            }) => quote! {
                ::attributes_core::MetadataTag::Deprecated(::attributes_core::DeprecatedTag {
                    message: #message,
                    is_hard_error: #is_hard_error,
                })
            },
        })
        .collect()
}

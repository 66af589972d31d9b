//! Derive macro for the `keel_core::choice::Choice` trait.
//!
//! See `keel_core::choice` for the generated surface and its contracts.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Ident, Result, parse_macro_input};

// =============================================================================
// Choice derive
// =============================================================================

/// Generates the tagged-union operation surface for an enum.
///
/// For an enum `E`, the derive produces:
///
/// - `enum ETag`, one unit variant per alternative, deriving
///   `Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash`;
/// - `impl keel_core::choice::Choice for E` with `which(&self) -> ETag`;
/// - per alternative `V` with payload: `is_v`, `as_v`, `as_v_mut`
///   (panicking), `get_v`, `get_v_mut` (returning `keel_core::Maybe`),
///   `into_v` (consuming, panicking), `set_v` (switches the active
///   alternative, dropping the old payload), and the unsafe
///   `as_v_unchecked`/`as_v_unchecked_mut` (undefined behavior on tag
///   mismatch);
/// - per payload-free alternative: `is_v` and `set_v` only.
///
/// Multi-field payloads are exposed as tuples. Generic enums and
/// struct-style variants are not supported.
#[proc_macro_derive(Choice)]
pub fn derive_choice(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_choice_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_choice_impl(input: DeriveInput) -> Result<TokenStream2> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "Choice can only be derived for enums",
            ));
        }
    };

    if variants.is_empty() {
        return Err(Error::new_spanned(
            &input,
            "Choice requires at least one variant",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Choice cannot be derived for generic enums",
        ));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let tag_name = format_ident!("{}Tag", name);

    let tag_variants = variants.iter().map(|v| &v.ident);
    let which_arms = variants.iter().map(|v| {
        let variant = &v.ident;
        quote! { Self::#variant { .. } => #tag_name::#variant, }
    });

    let mut methods = TokenStream2::new();
    for variant in variants {
        let fields = match &variant.fields {
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => fields.unnamed.iter().map(|f| &f.ty).collect(),
            Fields::Named(_) => {
                return Err(Error::new_spanned(
                    variant,
                    "Choice does not support struct-style variants",
                ));
            }
        };
        methods.extend(variant_methods(name, variant_ident(variant), &fields));
    }

    let tag_doc = format!("The tag of an active [`{name}`] alternative.");

    Ok(quote! {
        #[doc = #tag_doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #vis enum #tag_name {
            #(#tag_variants,)*
        }

        #[automatically_derived]
        impl ::keel_core::choice::Choice for #name {
            type Tag = #tag_name;

            #[inline]
            fn which(&self) -> #tag_name {
                match self {
                    #(#which_arms)*
                }
            }
        }

        #[automatically_derived]
        #[allow(dead_code)]
        impl #name {
            #methods
        }
    })
}

fn variant_ident(variant: &syn::Variant) -> &Ident {
    &variant.ident
}

fn variant_methods(name: &Ident, variant: &Ident, fields: &[&syn::Type]) -> TokenStream2 {
    let snake = snake_case(&variant.to_string());
    let is_fn = format_ident!("is_{snake}");
    let set_fn = format_ident!("set_{snake}");

    let is_doc = format!("Returns `true` if the active alternative is `{variant}`.");
    let set_doc = format!("Switches the active alternative to `{variant}`, dropping the previous payload.");

    let mut out = quote! {
        #[doc = #is_doc]
        #[inline]
        pub fn #is_fn(&self) -> bool {
            matches!(self, Self::#variant { .. })
        }
    };

    if fields.is_empty() {
        out.extend(quote! {
            #[doc = #set_doc]
            #[inline]
            pub fn #set_fn(&mut self) {
                *self = Self::#variant;
            }
        });
        return out;
    }

    let as_fn = format_ident!("as_{snake}");
    let as_mut_fn = format_ident!("as_{snake}_mut");
    let get_fn = format_ident!("get_{snake}");
    let get_mut_fn = format_ident!("get_{snake}_mut");
    let into_fn = format_ident!("into_{snake}");
    let unchecked_fn = format_ident!("as_{snake}_unchecked");
    let unchecked_mut_fn = format_ident!("as_{snake}_unchecked_mut");

    let binds: Vec<Ident> = (0..fields.len()).map(|i| format_ident!("f{i}")).collect();
    let args: Vec<Ident> = (0..fields.len()).map(|i| format_ident!("v{i}")).collect();

    let (ref_ty, mut_ty, value_ty) = if fields.len() == 1 {
        let ty = fields[0];
        (quote!(&#ty), quote!(&mut #ty), quote!(#ty))
    } else {
        let tys = fields;
        (
            quote!((#(&#tys),*)),
            quote!((#(&mut #tys),*)),
            quote!((#(#tys),*)),
        )
    };
    let bound = if binds.len() == 1 {
        let bind = &binds[0];
        quote!(#bind)
    } else {
        quote!((#(#binds),*))
    };

    let mismatch = format!("choice is not `{name}::{variant}`");

    let as_doc = format!(
        "A reference to the `{variant}` payload.\n\n# Panics\n\nPanics if the active alternative is not `{variant}`."
    );
    let as_mut_doc = format!(
        "A mutable reference to the `{variant}` payload.\n\n# Panics\n\nPanics if the active alternative is not `{variant}`."
    );
    let get_doc = format!(
        "A reference to the `{variant}` payload, or `Nothing` on a tag mismatch."
    );
    let get_mut_doc = format!(
        "A mutable reference to the `{variant}` payload, or `Nothing` on a tag mismatch."
    );
    let into_doc = format!(
        "Consumes the choice, moving the `{variant}` payload out.\n\n# Panics\n\nPanics if the active alternative is not `{variant}`."
    );
    let unchecked_doc = format!(
        "A reference to the `{variant}` payload, without checking the tag.\n\n# Safety\n\nThe active alternative must be `{variant}`; anything else is undefined behavior."
    );
    let unchecked_mut_doc = format!(
        "A mutable reference to the `{variant}` payload, without checking the tag.\n\n# Safety\n\nThe active alternative must be `{variant}`; anything else is undefined behavior."
    );

    out.extend(quote! {
        #[doc = #as_doc]
        #[inline]
        #[track_caller]
        #[allow(unreachable_patterns)]
        pub fn #as_fn(&self) -> #ref_ty {
            match self {
                Self::#variant(#(#binds),*) => #bound,
                _ => panic!(#mismatch),
            }
        }

        #[doc = #as_mut_doc]
        #[inline]
        #[track_caller]
        #[allow(unreachable_patterns)]
        pub fn #as_mut_fn(&mut self) -> #mut_ty {
            match self {
                Self::#variant(#(#binds),*) => #bound,
                _ => panic!(#mismatch),
            }
        }

        #[doc = #get_doc]
        #[inline]
        #[allow(unreachable_patterns)]
        pub fn #get_fn(&self) -> ::keel_core::Maybe<#ref_ty> {
            match self {
                Self::#variant(#(#binds),*) => ::keel_core::Maybe::Just(#bound),
                _ => ::keel_core::Maybe::Nothing,
            }
        }

        #[doc = #get_mut_doc]
        #[inline]
        #[allow(unreachable_patterns)]
        pub fn #get_mut_fn(&mut self) -> ::keel_core::Maybe<#mut_ty> {
            match self {
                Self::#variant(#(#binds),*) => ::keel_core::Maybe::Just(#bound),
                _ => ::keel_core::Maybe::Nothing,
            }
        }

        #[doc = #into_doc]
        #[inline]
        #[track_caller]
        #[allow(unreachable_patterns)]
        pub fn #into_fn(self) -> #value_ty {
            match self {
                Self::#variant(#(#binds),*) => #bound,
                _ => panic!(#mismatch),
            }
        }

        #[doc = #set_doc]
        #[inline]
        pub fn #set_fn(&mut self, #(#args: #fields),*) {
            *self = Self::#variant(#(#args),*);
        }

        #[doc = #unchecked_doc]
        #[inline]
        #[allow(unreachable_patterns)]
        pub unsafe fn #unchecked_fn(&self) -> #ref_ty {
            match self {
                Self::#variant(#(#binds),*) => #bound,
                // SAFETY: the caller guarantees the tag matches.
                _ => unsafe { ::core::hint::unreachable_unchecked() },
            }
        }

        #[doc = #unchecked_mut_doc]
        #[inline]
        #[allow(unreachable_patterns)]
        pub unsafe fn #unchecked_mut_fn(&mut self) -> #mut_ty {
            match self {
                Self::#variant(#(#binds),*) => #bound,
                // SAFETY: the caller guarantees the tag matches.
                _ => unsafe { ::core::hint::unreachable_unchecked() },
            }
        }
    });

    out
}

fn snake_case(ident: &str) -> String {
    let mut out = String::new();
    let mut prev_lower = false;
    for ch in ident.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }
    out
}

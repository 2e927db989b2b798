//! Derive macro implementation used by `measures-core`.
//!
//! `measures-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::UnitDescriptor`, so it is intended to be used by `measures-core` (or by crates that
//! expose an identical crate-root API).
//!
//! # Generated impls
//!
//! For a quantity-kind newtype `Kind(UnitDescriptor)`, the derive implements:
//!
//! - `crate::Unit for Kind`
//! - `core::fmt::Display for Kind` (formats as the unit symbol)
//! - `From<Kind> for crate::UnitDescriptor`
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `kind = "time"`: human-readable name of the quantity kind, used in diagnostics
//! - `base = Self::SECOND`: expression evaluating to the nominated base unit

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit` for a single-field tuple struct wrapping a `crate::UnitDescriptor`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `kind` and `base`.
///
/// This macro is intended for use by `measures-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    check_newtype(&input)?;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let kind = &unit_attr.kind;
    let base = &unit_attr.base;

    let expanded = quote! {
        impl crate::Unit for #name {
            const KIND: &'static str = #kind;

            #[inline]
            fn base() -> Self {
                #base
            }

            #[inline]
            fn descriptor(&self) -> &crate::UnitDescriptor {
                &self.0
            }

            #[inline]
            fn from_descriptor(descriptor: crate::UnitDescriptor) -> Self {
                Self(descriptor)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::Unit>::symbol(self))
            }
        }

        impl ::core::convert::From<#name> for crate::UnitDescriptor {
            #[inline]
            fn from(unit: #name) -> Self {
                unit.0
            }
        }
    };

    Ok(expanded)
}

/// Quantity kinds must be `struct Kind(UnitDescriptor);`.
fn check_newtype(input: &DeriveInput) -> syn::Result<()> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(()),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "`Unit` can only be derived for a tuple struct with a single `UnitDescriptor` field",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "`Unit` can only be derived for structs",
        )),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    kind: LitStr,
    base: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut kind: Option<LitStr> = None;
        let mut base: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "kind" => {
                    kind = Some(input.parse()?);
                }
                "base" => {
                    base = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let kind =
            kind.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `kind`"))?;
        let base =
            base.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `base`"))?;

        if kind.value().is_empty() {
            return Err(syn::Error::new(kind.span(), "`kind` must not be empty"));
        }

        Ok(UnitAttribute { kind, base })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

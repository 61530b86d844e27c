//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Code generation for `sumkit`.
//!
//! `#[sumtype(Base)]` turns an empty `struct Name;` into a concrete name for `Base`. See the
//! `sumkit` crate for the user-facing documentation.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{quote, ToTokens};
use syn::ItemStruct;

mod declaration;
mod diagnostics;
mod results;
mod unions;
mod validate;

use declaration::{Base, Declaration};
use diagnostics::Diagnostic;

pub(crate) fn tl_mod() -> proc_macro2::TokenStream {
    match proc_macro_crate::crate_name("sumkit-core") {
        Ok(proc_macro_crate::FoundCrate::Itself) => return quote!(crate),
        Ok(proc_macro_crate::FoundCrate::Name(crate_name)) => {
            let crate_name = Ident::new(&crate_name, Span::call_site());
            return quote!(::#crate_name);
        }
        _ => {}
    }
    match proc_macro_crate::crate_name("sumkit")
        .expect("Couldn't find `sumkit` in your dependencies")
    {
        proc_macro_crate::FoundCrate::Itself => quote!(crate::types),
        proc_macro_crate::FoundCrate::Name(crate_name) => {
            let crate_name = Ident::new(&crate_name, Span::call_site());
            quote!(::#crate_name::types)
        }
    }
}

/// The part every generated name shares: the newtype itself, its conversions, and `Named`.
pub(crate) fn newtype(
    item: &ItemStruct,
    base: &proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    let st = tl_mod();
    let ItemStruct {
        attrs, vis, ident, ..
    } = item;
    quote! {
        #(#attrs)*
        #vis struct #ident(#base);

        #[automatically_derived]
        impl ::core::ops::Deref for #ident {
            type Target = #base;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
        #[automatically_derived]
        impl ::core::ops::DerefMut for #ident {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
        #[automatically_derived]
        impl ::core::convert::From<#base> for #ident {
            fn from(base: #base) -> Self {
                Self(base)
            }
        }
        #[automatically_derived]
        impl ::core::convert::From<#ident> for #base {
            fn from(named: #ident) -> Self {
                named.0
            }
        }
        #[automatically_derived]
        impl #st::Named for #ident {
            type Base = #base;
            fn into_base(self) -> Self::Base {
                self.0
            }
            fn from_base(base: Self::Base) -> Self {
                Self(base)
            }
            fn base(&self) -> &Self::Base {
                &self.0
            }
        }
    }
}

/// Gives a concrete name to a `Result` or `Union` specialisation.
///
/// ```ignore
/// #[sumtype(Result<u32, String>)]
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Parsed;
///
/// #[sumtype(Union<Meters, Feet>)]
/// pub struct Distance;
/// ```
///
/// The accepted bases are `Result<Ok, Err>`, `Result<Err>` (whose success carries no value),
/// `Union<T0, ..>` and `UnionN<..>` with 2 to 5 members. Declarations that can't be named are
/// left untouched and every reason for the refusal is reported with a stable code:
/// `SK1001`..`SK1003` for results, `SK2001`..`SK2005` for unions.
#[proc_macro_attribute]
pub fn sumtype(sumtype_attrs: TokenStream, tokens: TokenStream) -> TokenStream {
    let base: syn::Type = match syn::parse(sumtype_attrs) {
        Ok(base) => base,
        Err(e) => return e.to_compile_error().into(),
    };
    let item: syn::Item = match syn::parse(tokens) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error().into(),
    };
    let declaration = Declaration::new(base, item);
    let diagnostics = validate::validate(&declaration);
    let Declaration { item, base, .. } = declaration;
    match (item, base) {
        (syn::Item::Struct(item), base) if diagnostics.is_empty() => match base {
            Base::Result { ok, err } => results::generate(&item, Some(&ok), &err),
            Base::UnitResult { err } => results::generate(&item, None, &err),
            Base::Union { members, .. } => unions::generate(&item, &members),
            Base::Invalid(_) => unreachable!("invalid bases are always diagnosed"),
        },
        (item, _) => {
            let errors = diagnostics.iter().map(Diagnostic::to_compile_error);
            let mut tokens = item.into_token_stream();
            tokens.extend(errors);
            tokens
        }
    }
    .into()
}

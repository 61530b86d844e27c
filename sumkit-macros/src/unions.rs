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

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemStruct, Type};

const CONSTRUCTORS: [&str; 5] = ["First", "Second", "Third", "Fourth", "Fifth"];

/// Names a `UnionN<..>` over `members`, which must hold 2 to 5 types.
pub fn generate(item: &ItemStruct, members: &[Type]) -> TokenStream {
    let st = crate::tl_mod();
    let ident = &item.ident;
    let union = format_ident!("Union{}", members.len());
    let base = quote!(#st::#union<#(#members),*>);
    let constructors = CONSTRUCTORS
        .iter()
        .map(|constructor| format_ident!("{constructor}"))
        .collect::<Vec<_>>();
    let mut factories = quote!();
    let mut conversions = quote!();
    for (ty, constructor) in members.iter().zip(&constructors) {
        let doc = format!("Constructs the union from its `{}` member.", quote!(#ty));
        factories.extend(quote! {
            #[doc = #doc]
            #[allow(non_snake_case)]
            pub fn #constructor(value: #ty) -> Self {
                Self(#st::#union::#constructor(value))
            }
        });
        conversions.extend(quote! {
            #[automatically_derived]
            impl ::core::convert::From<#ty> for #ident {
                fn from(value: #ty) -> Self {
                    Self::#constructor(value)
                }
            }
        });
    }
    let newtype = crate::newtype(item, &base);
    quote! {
        #newtype

        #[automatically_derived]
        impl #ident {
            #factories
        }
        #conversions
    }
}

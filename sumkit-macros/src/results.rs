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
use quote::quote;
use syn::{ItemStruct, Type};

/// Names a `Result<Ok, Err>`, or a unit-success result when `ok` is `None`.
pub fn generate(item: &ItemStruct, ok: Option<&Type>, err: &Type) -> TokenStream {
    let st = crate::tl_mod();
    let ident = &item.ident;
    let base = match ok {
        Some(ok) => quote!(#st::Result<#ok, #err>),
        None => quote!(#st::Result<#st::Unit, #err>),
    };
    let success = match ok {
        Some(ok) => quote! {
            /// Constructs the success variant.
            #[allow(non_snake_case)]
            pub fn Ok(value: #ok) -> Self {
                Self(#st::Result::Ok(value))
            }
        },
        None => quote! {
            /// Constructs the success variant.
            #[allow(non_snake_case)]
            pub fn Success() -> Self {
                Self(#st::Result::Success())
            }
            /// Same as `Success()`, under the name used by results that carry a value.
            #[allow(non_snake_case)]
            pub fn Ok() -> Self {
                Self::Success()
            }
        },
    };
    let newtype = crate::newtype(item, &base);
    quote! {
        #newtype

        #[automatically_derived]
        impl #ident {
            #success
            /// Constructs the failure variant.
            #[allow(non_snake_case)]
            pub fn Err(error: #err) -> Self {
                Self(#st::Result::Err(error))
            }
        }
    }
}

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

use proc_macro2::Span;
use quote::ToTokens;
use syn::{spanned::Spanned, GenericArgument, Item, PathArguments, Type};

use crate::diagnostics::Family;

/// The container a declaration asks to be named after.
#[derive(Debug, Clone)]
pub enum Base {
    /// `Result<Ok, Err>`
    Result { ok: Type, err: Type },
    /// `Result<Err>` or `UnitResult<Err>`: success carries no value.
    UnitResult { err: Type },
    /// `Union<..>` or `UnionN<..>`, with the arity spelled in the name if any.
    Union {
        declared: Option<usize>,
        members: Vec<Type>,
    },
    /// Anything else.
    Invalid(Type),
}

impl Base {
    pub fn family(&self) -> Family {
        match self {
            Base::Union { .. } => Family::Union,
            _ => Family::Result,
        }
    }
}

impl From<Type> for Base {
    fn from(ty: Type) -> Self {
        let Type::Path(path) = &ty else {
            return Base::Invalid(ty);
        };
        if path.qself.is_some() {
            return Base::Invalid(ty);
        }
        let Some(last) = path.path.segments.last() else {
            return Base::Invalid(ty);
        };
        let prefix: Vec<String> = path
            .path
            .segments
            .iter()
            .take(path.path.segments.len() - 1)
            .map(|segment| segment.ident.to_string())
            .collect();
        if !is_sumkit_prefix(&prefix) {
            return Base::Invalid(ty);
        }
        let args: Vec<Type> = match &last.arguments {
            PathArguments::AngleBracketed(args) => args
                .args
                .iter()
                .filter_map(|arg| match arg {
                    GenericArgument::Type(ty) => Some(ty.clone()),
                    _ => None,
                })
                .collect(),
            PathArguments::None => Vec::new(),
            PathArguments::Parenthesized(_) => return Base::Invalid(ty),
        };
        let name = last.ident.to_string();
        match (name.as_str(), args.len()) {
            ("Result", 2) => {
                let mut args = args.into_iter();
                match (args.next(), args.next()) {
                    (Some(ok), Some(err)) => Base::Result { ok, err },
                    _ => Base::Invalid(ty),
                }
            }
            ("Result" | "UnitResult", 1) => match args.into_iter().next() {
                Some(err) => Base::UnitResult { err },
                None => Base::Invalid(ty),
            },
            ("Union", _) => Base::Union {
                declared: None,
                members: args,
            },
            (name, _) => match name
                .strip_prefix("Union")
                .and_then(|arity| arity.parse::<usize>().ok())
            {
                Some(arity) => Base::Union {
                    declared: Some(arity),
                    members: args,
                },
                None => Base::Invalid(ty),
            },
        }
    }
}

/// Bases are recognised by spelling: bare, or qualified by one of this crate's own paths.
/// `io::Result` or `std::result::Result` are someone else's types.
fn is_sumkit_prefix(prefix: &[String]) -> bool {
    let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
    matches!(
        prefix.as_slice(),
        [] | ["sumkit"] | ["sumkit", "types"] | ["sumkit_core"]
    )
}

/// A `#[sumtype(Base)]` declaration: the annotated item and the base it names.
pub struct Declaration {
    pub item: Item,
    pub base: Base,
    pub base_span: Span,
}

impl Declaration {
    pub fn new(base: Type, item: Item) -> Self {
        Declaration {
            base_span: base.span(),
            base: base.into(),
            item,
        }
    }
    /// The declared name, or the item's leading tokens for items that have none.
    pub fn name(&self) -> String {
        match &self.item {
            Item::Struct(item) => item.ident.to_string(),
            Item::Enum(item) => item.ident.to_string(),
            Item::Union(item) => item.ident.to_string(),
            Item::Type(item) => item.ident.to_string(),
            Item::Trait(item) => item.ident.to_string(),
            Item::Fn(item) => item.sig.ident.to_string(),
            Item::Mod(item) => item.ident.to_string(),
            item => {
                let tokens = item.to_token_stream().to_string();
                tokens.chars().take(24).collect()
            }
        }
    }
}

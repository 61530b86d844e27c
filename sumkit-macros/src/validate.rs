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

use std::collections::HashSet;

use quote::ToTokens;
use syn::{spanned::Spanned, Fields, GenericArgument, Item, PathArguments, Type, TypeParamBound};

use crate::{
    declaration::{Base, Declaration},
    diagnostics::{Code, Diagnostic, Family},
};

/// Collects every reason to refuse generating `declaration`.
///
/// An empty result means the declaration may be generated.
pub fn validate(declaration: &Declaration) -> Vec<Diagnostic> {
    let name = declaration.name();
    let family = declaration.base.family();
    let mut diagnostics = Vec::new();
    match &declaration.item {
        Item::Struct(item)
            if matches!(item.fields, Fields::Unit)
                && item.generics.params.is_empty()
                && item.generics.where_clause.is_none() => {}
        item => diagnostics.push(Diagnostic::error(
            Code::not_standalone(family),
            &name,
            item.span(),
            "must be declared as a plain `struct Name;`, without fields or generic parameters",
        )),
    }
    match &declaration.base {
        Base::Invalid(ty) => diagnostics.push(Diagnostic::error(
            Code::ResultInvalidBase,
            &name,
            declaration.base_span,
            format!(
                "`{}` is not a valid base, expected `Result<Ok, Err>`, `Result<Err>` or `Union<T0, ..>` with 2 to 5 members",
                ty.to_token_stream()
            ),
        )),
        Base::Result { ok, err } => {
            for ty in [ok, err] {
                check_universal_root(&name, ty, family, &mut diagnostics);
            }
        }
        Base::UnitResult { err } => {
            check_universal_root(&name, err, family, &mut diagnostics)
        }
        Base::Union { declared, members } => {
            let arity = members.len();
            if !(2..=5).contains(&arity) {
                diagnostics.push(Diagnostic::error(
                    Code::UnionInvalidArity,
                    &name,
                    declaration.base_span,
                    format!("unions take 2 to 5 members, found {arity}"),
                ));
            } else if let Some(declared) = declared.filter(|declared| *declared != arity) {
                diagnostics.push(Diagnostic::error(
                    Code::UnionInvalidArity,
                    &name,
                    declaration.base_span,
                    format!("`Union{declared}` takes {declared} members, found {arity}"),
                ));
            }
            let mut seen = HashSet::new();
            for member in members {
                if is_universal_root(member) {
                    check_universal_root(&name, member, family, &mut diagnostics);
                } else if is_interface(member) {
                    diagnostics.push(Diagnostic::error(
                        Code::UnionInterfaceMember,
                        &name,
                        member.span(),
                        format!(
                            "`{}` is a trait type: conversions into the union would be ambiguous for types implementing it",
                            member.to_token_stream()
                        ),
                    ));
                }
                let spelled = member.to_token_stream().to_string();
                if !seen.insert(spelled) {
                    diagnostics.push(Diagnostic::error(
                        Code::UnionDuplicateMember,
                        &name,
                        member.span(),
                        format!(
                            "`{}` appears more than once: conversions into the union would be ambiguous",
                            member.to_token_stream()
                        ),
                    ));
                }
            }
        }
    }
    diagnostics
}

fn check_universal_root(
    name: &str,
    ty: &Type,
    family: Family,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if is_universal_root(ty) {
        diagnostics.push(Diagnostic::error(
            Code::universal_root(family),
            name,
            ty.span(),
            format!(
                "`{}` accepts every type: conversions into the container would be ambiguous",
                ty.to_token_stream()
            ),
        ))
    }
}

/// Strips references, parentheses, and the standard owning pointers.
fn pointee(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => pointee(&reference.elem),
        Type::Paren(paren) => pointee(&paren.elem),
        Type::Group(group) => pointee(&group.elem),
        Type::Ptr(ptr) => pointee(&ptr.elem),
        Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return ty;
            };
            if !matches!(last.ident.to_string().as_str(), "Box" | "Rc" | "Arc") {
                return ty;
            }
            let PathArguments::AngleBracketed(args) = &last.arguments else {
                return ty;
            };
            match args.args.first() {
                Some(GenericArgument::Type(inner)) if args.args.len() == 1 => pointee(inner),
                _ => ty,
            }
        }
        _ => ty,
    }
}

fn trait_bounds(ty: &Type) -> Option<impl Iterator<Item = &syn::TraitBound>> {
    let bounds = match pointee(ty) {
        Type::TraitObject(object) => &object.bounds,
        Type::ImplTrait(imp) => &imp.bounds,
        _ => return None,
    };
    Some(bounds.iter().filter_map(|bound| match bound {
        TypeParamBound::Trait(bound) => Some(bound),
        TypeParamBound::Lifetime(_) => None,
    }))
}

/// `dyn Any`, possibly behind a pointer or with auto-trait bounds.
pub(crate) fn is_universal_root(ty: &Type) -> bool {
    trait_bounds(ty).map_or(false, |mut bounds| {
        bounds.any(|bound| {
            bound
                .path
                .segments
                .last()
                .map_or(false, |segment| segment.ident == "Any")
        })
    })
}

/// A trait object or `impl Trait`, possibly behind a pointer.
pub(crate) fn is_interface(ty: &Type) -> bool {
    trait_bounds(ty).is_some()
}

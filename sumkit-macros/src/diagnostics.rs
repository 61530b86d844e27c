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

use std::fmt;

use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;

/// Which family of generated types a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Result,
    Union,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Result => "result",
            Family::Union => "union",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// The annotated item is not a plain, field-less, non-generic struct.
    ResultNotStandalone,
    /// The base is neither a `Result` nor a `Union` shape, or is qualified by a path
    /// other than `sumkit`, `sumkit::types` or `sumkit_core`.
    ResultInvalidBase,
    /// One of the result's type arguments is `dyn Any`.
    ResultUniversalRoot,
    UnionNotStandalone,
    /// The member count is outside `2..=5`, or disagrees with the arity in the base's name.
    UnionInvalidArity,
    /// A member is a trait object or an `impl Trait`.
    UnionInterfaceMember,
    UnionUniversalRoot,
    /// Two members are spelled the same.
    ///
    /// Members are compared as written: `u8` and an alias of `u8` are different spellings,
    /// so they pass here and the overlapping `From` impls are reported by rustc instead.
    UnionDuplicateMember,
}

impl Code {
    pub const fn id(self) -> &'static str {
        match self {
            Code::ResultNotStandalone => "SK1001",
            Code::ResultInvalidBase => "SK1002",
            Code::ResultUniversalRoot => "SK1003",
            Code::UnionNotStandalone => "SK2001",
            Code::UnionInvalidArity => "SK2002",
            Code::UnionInterfaceMember => "SK2003",
            Code::UnionUniversalRoot => "SK2004",
            Code::UnionDuplicateMember => "SK2005",
        }
    }
    pub const fn family(self) -> Family {
        match self {
            Code::ResultNotStandalone | Code::ResultInvalidBase | Code::ResultUniversalRoot => {
                Family::Result
            }
            _ => Family::Union,
        }
    }
    pub const fn not_standalone(family: Family) -> Self {
        match family {
            Family::Result => Code::ResultNotStandalone,
            Family::Union => Code::UnionNotStandalone,
        }
    }
    pub const fn universal_root(family: Family) -> Self {
        match family {
            Family::Result => Code::ResultUniversalRoot,
            Family::Union => Code::UnionUniversalRoot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A refusal to generate a declaration, reported at compile time.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Code,
    pub severity: Severity,
    /// The name of the offending declaration.
    pub name: String,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(code: Code, name: &str, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            name: name.to_owned(),
            message: message.into(),
            span,
        }
    }
    pub fn to_compile_error(&self) -> TokenStream {
        let message = self.to_string();
        quote_spanned!(self.span=> ::core::compile_error!(#message);)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
        };
        write!(
            f,
            "{severity}[{}] {} `{}`: {}",
            self.code.id(),
            self.code.family(),
            self.name,
            self.message
        )
    }
}

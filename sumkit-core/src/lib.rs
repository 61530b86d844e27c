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

//! The container types behind `sumkit`.
//!
//! [`Option`], [`Result`] and the [`Union2`]..[`Union5`] family are immutable tagged containers.
//! Their payload is only reachable through narrowing (`is`, `ok`, `into_parts`...) or exhaustive
//! dispatch (`match_owned`, `switch`...): the storage itself is never exposed.

pub mod error;
#[cfg(feature = "futures")]
pub mod future;
pub mod named;
pub mod option;
pub mod result;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod union;
pub mod unit;

pub use error::AccessError;
pub use named::{
    Named, NamedResult, NamedUnion2, NamedUnion3, NamedUnion4, NamedUnion5, NamedUnitResult,
};
pub use option::{Nullable, Option};
pub use result::{Result, UnitResult};
pub use union::{AnyUnion, Member, Position, Union2, Union3, Union4, Union5, I0, I1, I2, I3, I4};
pub use unit::Unit;


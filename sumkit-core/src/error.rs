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

//! Failures of the discouraged escape hatches.
//!
//! Everything else in this crate is total: these only surface from `try_unwrap`,
//! [`Option::some_checked`](crate::Option::some_checked) and their panicking siblings.

use thiserror::Error;

/// Why a value couldn't be accessed or constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    /// `unwrap` was called on an empty [`Option`](crate::Option).
    #[error("attempted to access the value of an empty Option")]
    EmptyValue,
    /// `unwrap` was called on a [`Result`](crate::Result) in the `Err` state.
    #[error("attempted to access the Ok value of a Result in the Err state")]
    InvalidState,
    /// `Some` was built from a null sentinel.
    #[error("cannot construct Some from a null value")]
    NullSentinel,
}

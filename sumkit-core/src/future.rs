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

//! Continuations over pending computations that resolve to an [`Option`] or a [`Result`].
//!
//! Every adapter awaits the wrapped future, then applies the operation once. Nothing blocks, and
//! dropping the returned future drops the wrapped one, which is how cancellation propagates.
//!
//! [`TryOptionFutureExt`] covers computations that may themselves fail: their error is forwarded
//! untouched and the continuation is never called.

use core::future::Future;

use crate::{Option, Result};

/// Chains [`Option`] operations onto a future of an option.
pub trait OptionFutureExt<T>: Future<Output = Option<T>> + Sized {
    /// [`Option::map`] once resolved.
    fn map_some<U, F: FnOnce(T) -> U>(self, f: F) -> impl Future<Output = Option<U>> {
        async move { self.await.map(f) }
    }
    /// [`Option::match_owned`] once resolved.
    fn match_some<U, FnSome: FnOnce(T) -> U, FnNone: FnOnce() -> U>(
        self,
        some: FnSome,
        none: FnNone,
    ) -> impl Future<Output = U> {
        async move { self.await.match_owned(some, none) }
    }
    /// [`Option::value_or`] once resolved.
    fn some_or(self, fallback: T) -> impl Future<Output = T> {
        async move { self.await.value_or(fallback) }
    }
    /// [`Option::unwrap`] once resolved.
    ///
    /// # Panics
    /// If the option resolves empty.
    fn unwrap_some(self) -> impl Future<Output = T> {
        async move { self.await.unwrap() }
    }
}
impl<T, Fut: Future<Output = Option<T>>> OptionFutureExt<T> for Fut {}

/// Chains [`Option`] operations onto a fallible future of an option.
pub trait TryOptionFutureExt<T, E>:
    Future<Output = core::result::Result<Option<T>, E>> + Sized
{
    /// [`Option::map`] once resolved successfully.
    fn try_map_some<U, F: FnOnce(T) -> U>(
        self,
        f: F,
    ) -> impl Future<Output = core::result::Result<Option<U>, E>> {
        async move { forward(self.await).map(|option| option.map(f)) }
    }
    /// [`Option::match_owned`] once resolved successfully.
    fn try_match_some<U, FnSome: FnOnce(T) -> U, FnNone: FnOnce() -> U>(
        self,
        some: FnSome,
        none: FnNone,
    ) -> impl Future<Output = core::result::Result<U, E>> {
        async move { forward(self.await).map(|option| option.match_owned(some, none)) }
    }
    /// [`Option::value_or`] once resolved successfully.
    fn try_some_or(self, fallback: T) -> impl Future<Output = core::result::Result<T, E>> {
        async move { forward(self.await).map(|option| option.value_or(fallback)) }
    }
    /// [`Option::unwrap`] once resolved successfully.
    ///
    /// # Panics
    /// If the option resolves empty.
    fn try_unwrap_some(self) -> impl Future<Output = core::result::Result<T, E>> {
        async move { forward(self.await).map(Option::unwrap) }
    }
}
impl<T, E, Fut: Future<Output = core::result::Result<Option<T>, E>>> TryOptionFutureExt<T, E>
    for Fut
{
}

fn forward<T, E>(resolved: core::result::Result<T, E>) -> core::result::Result<T, E> {
    if resolved.is_err() {
        tracing::trace!("pending computation failed, skipping continuation");
    }
    resolved
}

/// Chains [`Result`] operations onto a future of a result.
pub trait ResultFutureExt<Ok, Err>: Future<Output = Result<Ok, Err>> + Sized {
    /// [`Result::map`] once resolved.
    fn map_ok<U, F: FnOnce(Ok) -> U>(self, f: F) -> impl Future<Output = Result<U, Err>> {
        async move { self.await.map(f) }
    }
    /// [`Result::map_err`] once resolved.
    fn map_err<E, F: FnOnce(Err) -> E>(self, f: F) -> impl Future<Output = Result<Ok, E>> {
        async move { self.await.map_err(f) }
    }
    /// [`Result::match_owned`] once resolved.
    fn match_result<U, FnOk: FnOnce(Ok) -> U, FnErr: FnOnce(Err) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> impl Future<Output = U> {
        async move { self.await.match_owned(ok, err) }
    }
    /// [`Result::unwrap`] once resolved.
    ///
    /// # Panics
    /// If the result resolves to an error.
    fn unwrap_ok(self) -> impl Future<Output = Ok>
    where
        Err: core::fmt::Debug,
    {
        async move { self.await.unwrap() }
    }
}
impl<Ok, Err, Fut: Future<Output = Result<Ok, Err>>> ResultFutureExt<Ok, Err> for Fut {}

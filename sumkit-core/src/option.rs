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

//! An option whose contents can only be reached through narrowing!

use core::future::Future;

use crate::{AccessError, Result, Unit};

/// Types with a built-in "no value" marker, distinct from [`Option::None`].
///
/// Raw pointers are the only such types: a nested `core::option::Option` is an ordinary sum type
/// and its `None` is a value like any other.
pub trait Nullable {
    /// Returns `true` if `self` is the null sentinel.
    fn is_null(&self) -> bool;
}
impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}
impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

/// An optional value.
///
/// Two empty options are equal, an empty and a present one never are, and two present ones are
/// equal when their values are.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Option<T> {
    inner: Result<T, Unit>,
}
impl<T: core::fmt::Debug> core::fmt::Debug for Option<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_ref().fmt(f)
    }
}
impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        Self::from_value(value)
    }
}
impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        value.match_owned(Some, || None)
    }
}
/// Wraps any value as present, exactly like [`Option::Some`].
///
/// A null raw pointer is wrapped too: use [`Option::from_nullable`] or [`Option::some_checked`]
/// for pointer payloads.
impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}
impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::None()
    }
}
impl<T> Option<T> {
    /// Construct the `Some` variant.
    ///
    /// This never inspects `value`. Raw-pointer payloads must go through [`Self::some_checked`]
    /// (which refuses null) or [`Self::from_nullable`] (which maps null to `None`).
    #[allow(non_snake_case)]
    pub fn Some(value: T) -> Self {
        Self {
            inner: Result::Ok(value),
        }
    }
    /// Construct the `None` variant.
    #[allow(non_snake_case)]
    pub fn None() -> Self {
        Self {
            inner: Result::Err(Unit),
        }
    }
    /// Bridges a nullable source: `None` stays `None`, anything else becomes `Some`.
    pub fn from_value(value: core::option::Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None(),
        }
    }
    /// Returns a reference to the option's contents if they exist.
    pub fn as_ref(&self) -> core::option::Option<&T> {
        self.match_ref(Some, || None)
    }
    /// Equivalent to `match &self`.
    pub fn match_ref<'a, U, FnSome: FnOnce(&'a T) -> U, FnNone: FnOnce() -> U>(
        &'a self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.inner.match_ref(some, |_| none())
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnSome: FnOnce(T) -> U, FnNone: FnOnce() -> U>(
        self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.inner.match_owned(some, |_| none())
    }
    /// Returns `true` if `self` contains a value.
    pub fn is_some(&self) -> bool {
        self.inner.is_ok()
    }
    /// Returns `true` if `self` doesn't contain a value.
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }
    /// Splits the option into `(is_some, value)`, where `value` is `T::default()` when empty.
    pub fn into_parts(self) -> (bool, T)
    where
        T: Default,
    {
        self.match_owned(|value| (true, value), || (false, T::default()))
    }
    /// Converts into the standard library's option.
    pub fn into_std(self) -> core::option::Option<T> {
        self.into()
    }
    /// Applies a computation to the contained value.
    pub fn map<F: FnOnce(T) -> U, U>(self, f: F) -> Option<U> {
        self.match_owned(move |x| Option::Some(f(x)), Option::None)
    }
    /// Applies a computation that may itself produce nothing, without nesting options.
    pub fn and_then<F: FnOnce(T) -> Option<U>, U>(self, f: F) -> Option<U> {
        self.match_owned(f, Option::None)
    }
    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.and_then(|x| if predicate(&x) { Self::Some(x) } else { Self::None() })
    }
    /// Returns `self` if it contains a value, `other` otherwise.
    pub fn or(self, other: Self) -> Self {
        if self.is_some() {
            self
        } else {
            other
        }
    }
    /// Turns the option into a result, using `error` if no value was in it.
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.match_owned(Result::Ok, || Result::Err(error))
    }
    /// Calls `f` on the contained value, if any.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Some(value) = self.as_ref() {
            f(value)
        }
        self
    }
    /// Awaits `f` on the contained value, if any.
    pub async fn inspect_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(value) = self.as_ref() {
            f(value).await
        }
        self
    }
    /// Unwraps the option, or returns `fallback` if no value was in it.
    pub fn value_or(self, fallback: T) -> T {
        self.value_or_else(|| fallback)
    }
    /// Unwraps the option, or returns `T::default()` if no value was in it.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }
    /// Unwraps the option, or runs `f` if no value was in it.
    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.match_owned(|x| x, f)
    }
    /// Returns the contained value, or [`AccessError::EmptyValue`].
    pub fn try_unwrap(self) -> core::result::Result<T, AccessError> {
        self.match_owned(Ok, || {
            tracing::debug!("Option::try_unwrap called on None");
            Err(AccessError::EmptyValue)
        })
    }
    /// Prefer [`Self::match_owned`], [`Self::into_parts`] or [`Self::value_or`].
    ///
    /// # Panics
    /// If `!self.is_some`
    pub fn unwrap(self) -> T {
        self.value_or_else(|| panic!("{}", AccessError::EmptyValue))
    }
}
impl<T: Nullable> Option<T> {
    /// `None` if `value` is the null sentinel, `Some(value)` otherwise.
    pub fn from_nullable(value: T) -> Self {
        if value.is_null() {
            Self::None()
        } else {
            Self::Some(value)
        }
    }
    /// Construct the `Some` variant, refusing the null sentinel.
    ///
    /// # Errors
    /// [`AccessError::NullSentinel`] if `value` is null.
    pub fn some_checked(value: T) -> core::result::Result<Self, AccessError> {
        if value.is_null() {
            tracing::warn!("refused to construct Some from a null sentinel");
            Err(AccessError::NullSentinel)
        } else {
            Ok(Self::Some(value))
        }
    }
}

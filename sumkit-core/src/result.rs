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

//! Results that can only be taken apart at the call site!

use core::future::Future;

use crate::{AccessError, Option, Unit};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T, E> {
    Ok(T),
    Err(E),
}

/// The outcome of a fallible computation: exactly one of a success value or an error value.
///
/// The state is fixed at construction. Two results are equal when they are in the same state
/// and their payloads are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Result<Ok, Err> {
    inner: Repr<Ok, Err>,
}

/// A [`Result`] whose success carries no information.
pub type UnitResult<Err> = Result<Unit, Err>;

impl<Ok, Err> core::fmt::Debug for Result<Ok, Err>
where
    Ok: core::fmt::Debug,
    Err: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_ref().fmt(f)
    }
}
impl<Ok, Err> From<core::result::Result<Ok, Err>> for Result<Ok, Err> {
    fn from(value: core::result::Result<Ok, Err>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(value) => Self::Err(value),
        }
    }
}
impl<Ok, Err> From<Result<Ok, Err>> for core::result::Result<Ok, Err> {
    fn from(value: Result<Ok, Err>) -> Self {
        value.match_owned(Ok, Err)
    }
}
impl<Ok, Err> Result<Ok, Err> {
    /// Construct the `Ok` variant.
    #[allow(non_snake_case)]
    pub fn Ok(value: Ok) -> Self {
        Self {
            inner: Repr::Ok(value),
        }
    }
    /// Construct the `Err` variant.
    #[allow(non_snake_case)]
    pub fn Err(error: Err) -> Self {
        Self {
            inner: Repr::Err(error),
        }
    }
    /// Converts to a standard [`Result`](core::result::Result) of immutable references to the variants.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_ref(&self) -> core::result::Result<&Ok, &Err> {
        self.match_ref(Ok, Err)
    }
    /// Equivalent to `match &self`.
    pub fn match_ref<'a, U, FnOk: FnOnce(&'a Ok) -> U, FnErr: FnOnce(&'a Err) -> U>(
        &'a self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match &self.inner {
            Repr::Ok(value) => ok(value),
            Repr::Err(error) => err(error),
        }
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnOk: FnOnce(Ok) -> U, FnErr: FnOnce(Err) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match self.inner {
            Repr::Ok(value) => ok(value),
            Repr::Err(error) => err(error),
        }
    }
    /// Runs exactly one of the two actions, for their side effects only.
    pub fn switch<FnOk: FnOnce(&Ok), FnErr: FnOnce(&Err)>(&self, ok: FnOk, err: FnErr) {
        self.match_ref(ok, err)
    }
    /// Returns `true` if in the `Ok` variant.
    pub fn is_ok(&self) -> bool {
        matches!(self.inner, Repr::Ok(_))
    }
    /// Returns `true` if in the `Err` variant.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
    /// Returns the `Ok` variant if it exists, `None` otherwise.
    ///
    /// This is the intended way to narrow a result down to its success value.
    pub fn ok(self) -> Option<Ok> {
        self.match_owned(Option::Some, |_| Option::None())
    }
    /// Returns the `Err` variant if it exists, `None` otherwise.
    pub fn err(self) -> Option<Err> {
        self.match_owned(|_| Option::None(), Option::Some)
    }
    /// Returns the `Ok` variant by reference if it exists, `None` otherwise.
    pub fn ok_ref(&self) -> core::option::Option<&Ok> {
        self.match_ref(Some, |_| None)
    }
    /// Returns the `Err` variant by reference if it exists, `None` otherwise.
    pub fn err_ref(&self) -> core::option::Option<&Err> {
        self.match_ref(|_| None, Some)
    }
    /// Splits the result into `(is_err, ok, err)`, where the inactive side is its type's default.
    ///
    /// Meant for early returns:
    /// ```
    /// # use sumkit_core::Result;
    /// fn halve(r: Result<u32, String>) -> Result<u32, String> {
    ///     let (is_err, ok, err) = r.into_parts();
    ///     if is_err {
    ///         return Result::Err(err);
    ///     }
    ///     Result::Ok(ok / 2)
    /// }
    /// assert_eq!(halve(Result::Ok(8)), Result::Ok(4));
    /// ```
    pub fn into_parts(self) -> (bool, Ok, Err)
    where
        Ok: Default,
        Err: Default,
    {
        self.match_owned(
            |ok| (false, ok, Default::default()),
            |err| (true, Default::default(), err),
        )
    }
    /// Converts into the standard library's result, which lets `?` do the early return.
    #[allow(clippy::missing_errors_doc)]
    pub fn into_std(self) -> core::result::Result<Ok, Err> {
        self.into()
    }
    /// Applies a computation to the `Ok` variant.
    pub fn map<F: FnOnce(Ok) -> U, U>(self, f: F) -> Result<U, Err> {
        self.match_owned(move |x| Result::Ok(f(x)), Result::Err)
    }
    /// Applies a computation to the `Err` variant.
    pub fn map_err<F: FnOnce(Err) -> E, E>(self, f: F) -> Result<Ok, E> {
        self.match_owned(Result::Ok, move |x| Result::Err(f(x)))
    }
    /// Applies a fallible computation to the `Ok` variant.
    pub fn and_then<F: FnOnce(Ok) -> Result<U, Err>, U>(self, f: F) -> Result<U, Err> {
        self.match_owned(f, Result::Err)
    }
    /// Calls `f` on the `Ok` variant, if any.
    pub fn inspect<F: FnOnce(&Ok)>(self, f: F) -> Self {
        if let Repr::Ok(value) = &self.inner {
            f(value)
        }
        self
    }
    /// Calls `f` on the `Err` variant, if any.
    pub fn inspect_err<F: FnOnce(&Err)>(self, f: F) -> Self {
        if let Repr::Err(error) = &self.inner {
            f(error)
        }
        self
    }
    /// Awaits `f` on the `Ok` variant, if any.
    pub async fn inspect_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&Ok) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Repr::Ok(value) = &self.inner {
            f(value).await
        }
        self
    }
    /// Awaits `f` on the `Err` variant, if any.
    pub async fn inspect_err_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&Err) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Repr::Err(error) = &self.inner {
            f(error).await
        }
        self
    }
    /// Returns the `Ok` variant if applicable, calling `f` on the `Err` otherwise.
    pub fn unwrap_or_else<F: FnOnce(Err) -> Ok>(self, f: F) -> Ok {
        self.match_owned(|x| x, f)
    }
    /// Returns the `Ok` variant if applicable, `fallback` otherwise.
    pub fn value_or(self, fallback: Ok) -> Ok {
        self.unwrap_or_else(|_| fallback)
    }
    /// Returns the `Ok` variant, or [`AccessError::InvalidState`] if `self` is an error.
    pub fn try_unwrap(self) -> core::result::Result<Ok, AccessError> {
        self.match_owned(Ok, |_| {
            tracing::debug!("Result::try_unwrap called on Err variant");
            Err(AccessError::InvalidState)
        })
    }
    /// Prefer [`Self::match_owned`], [`Self::ok`] or [`Self::into_parts`].
    ///
    /// # Panics
    /// If `!self.is_ok()`
    pub fn unwrap(self) -> Ok
    where
        Err: core::fmt::Debug,
    {
        self.unwrap_or_else(|e| panic!("{}: {e:?}", AccessError::InvalidState))
    }
    /// Returns the `Err` variant if applicable, calling `f` on the `Ok` otherwise.
    pub fn unwrap_err_or_else<F: FnOnce(Ok) -> Err>(self, f: F) -> Err {
        self.match_owned(f, |x| x)
    }
    /// # Panics
    /// If `!self.is_err()`
    pub fn unwrap_err(self) -> Err
    where
        Ok: core::fmt::Debug,
    {
        self.unwrap_err_or_else(|e| panic!("Result::unwrap_err called on Ok variant: {e:?}"))
    }
}

impl<Err> Result<Unit, Err> {
    /// Construct the `Ok` variant of a result that succeeds without a value.
    #[allow(non_snake_case)]
    pub fn Success() -> Self {
        Self::Ok(Unit)
    }
    /// Equivalent to `match self`, with a success branch that takes no argument.
    pub fn match_success<U, FnOk: FnOnce() -> U, FnErr: FnOnce(Err) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.match_owned(|_| ok(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_branch_runs() {
        let calls = core::cell::RefCell::new(Vec::new());
        let ok = |_: &u8| calls.borrow_mut().push("ok");
        let err = |_: &&str| calls.borrow_mut().push("err");
        Result::<u8, &str>::Ok(3).switch(ok, err);
        Result::<u8, &str>::Err("bad").switch(ok, err);
        assert_eq!(*calls.borrow(), ["ok", "err"]);
    }

    #[test]
    fn doubling() {
        let doubled = Result::<i32, String>::Ok(3)
            .map(|x| x * 2)
            .match_owned(|ok| ok, |_| -1);
        assert_eq!(doubled, 6);
    }

    #[test]
    fn passthrough() {
        assert_eq!(Result::<u8, u8>::Ok(1).map_err(|e| e + 1), Result::Ok(1));
        assert_eq!(
            Result::<u8, &str>::Err("e").map(|x| x.to_string()),
            Result::Err("e")
        );
        assert_ne!(Result::<u8, u8>::Ok(1), Result::Err(1));
    }

    #[test]
    fn narrowing() {
        let (is_err, ok, err) = Result::<u32, String>::Err("bad".into()).into_parts();
        assert!(is_err);
        assert_eq!(ok, 0);
        assert_eq!(err, "bad");
        let (is_err, ok, err) = Result::<u32, String>::Ok(7).into_parts();
        assert!(!is_err);
        assert_eq!(ok, 7);
        assert!(err.is_empty());
        assert_eq!(Result::<u32, ()>::Ok(7).ok(), Option::Some(7));
        assert_eq!(Result::<u32, ()>::Err(()).ok(), Option::None());
        assert_eq!(Result::<u32, &str>::Err("bad").err(), Option::Some("bad"));
    }

    #[test]
    fn unwrapping() {
        assert_eq!(Result::<u8, ()>::Ok(2).try_unwrap(), Ok(2));
        assert_eq!(
            Result::<u8, ()>::Err(()).try_unwrap(),
            Err(AccessError::InvalidState)
        );
        assert_eq!(Result::<u8, ()>::Err(()).value_or(9), 9);
    }

    #[test]
    #[should_panic(expected = "Err state")]
    fn unwrap_on_err_panics() {
        Result::<u8, &str>::Err("bad").unwrap();
    }

    #[test]
    fn inspection_hooks() {
        let mut seen = None;
        let r = Result::<u8, &str>::Ok(4).inspect(|v| seen = Some(*v)).inspect_err(|_| panic!());
        assert_eq!(seen, Some(4));
        assert_eq!(r, Result::Ok(4));
    }

    #[test]
    fn unit_success() {
        let r: UnitResult<&str> = Result::Success();
        assert!(r.is_ok());
        assert_eq!(r.match_success(|| "fine", |e| e), "fine");
        assert_eq!(
            UnitResult::Err("broken").match_success(|| "fine", |e| e),
            "broken"
        );
    }

    #[test]
    fn std_interop() {
        fn checked(r: Result<u8, &'static str>) -> core::result::Result<u8, &'static str> {
            let value = r.into_std()?;
            Ok(value + 1)
        }
        assert_eq!(checked(Result::Ok(1)), Ok(2));
        assert_eq!(checked(Result::Err("no")), Err("no"));
        assert_eq!(format!("{:?}", Result::<u8, u8>::Err(1)), "Err(1)");
    }
}

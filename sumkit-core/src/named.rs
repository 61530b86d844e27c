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

//! The contract between a generated named type and the container it specialises.
//!
//! `#[sumtype(...)]` turns `struct MyResult;` into a newtype over its base and implements [`Named`]
//! for it. Borrowing operations reach the base through `Deref`; the operations that consume the
//! container live on the blanket traits below, so that `my_result.unwrap()` reads the same as it
//! would on the base.

use core::future::Future;

use crate::{Result, Union2, Union3, Union4, Union5, Unit};

/// A concrete, non-generic name for one specialisation of a container.
pub trait Named: Sized {
    /// The container being named.
    type Base;
    /// Unwraps the name.
    fn into_base(self) -> Self::Base;
    /// Wraps a base value under the name.
    fn from_base(base: Self::Base) -> Self;
    /// Borrows the base value.
    fn base(&self) -> &Self::Base;
}

/// The consuming operations of [`Result`], available on any name for a result.
pub trait NamedResult<Ok, Err>: Named<Base = Result<Ok, Err>> {
    /// See [`Result::match_owned`].
    fn match_owned<U, FnOk: FnOnce(Ok) -> U, FnErr: FnOnce(Err) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.into_base().match_owned(ok, err)
    }
    /// See [`Result::map`].
    fn map<F: FnOnce(Ok) -> U, U>(self, f: F) -> Result<U, Err> {
        self.into_base().map(f)
    }
    /// See [`Result::map_err`].
    fn map_err<F: FnOnce(Err) -> E, E>(self, f: F) -> Result<Ok, E> {
        self.into_base().map_err(f)
    }
    /// See [`Result::and_then`].
    fn and_then<F: FnOnce(Ok) -> Result<U, Err>, U>(self, f: F) -> Result<U, Err> {
        self.into_base().and_then(f)
    }
    /// See [`Result::inspect`].
    fn inspect<F: FnOnce(&Ok)>(self, f: F) -> Self {
        Self::from_base(self.into_base().inspect(f))
    }
    /// See [`Result::inspect_err`].
    fn inspect_err<F: FnOnce(&Err)>(self, f: F) -> Self {
        Self::from_base(self.into_base().inspect_err(f))
    }
    /// See [`Result::ok`].
    fn ok(self) -> crate::Option<Ok> {
        self.into_base().ok()
    }
    /// See [`Result::err`].
    fn err(self) -> crate::Option<Err> {
        self.into_base().err()
    }
    /// See [`Result::into_parts`].
    fn into_parts(self) -> (bool, Ok, Err)
    where
        Ok: Default,
        Err: Default,
    {
        self.into_base().into_parts()
    }
    /// See [`Result::into_std`].
    #[allow(clippy::missing_errors_doc)]
    fn into_std(self) -> core::result::Result<Ok, Err> {
        self.into_base().into_std()
    }
    /// See [`Result::value_or`].
    fn value_or(self, fallback: Ok) -> Ok {
        self.into_base().value_or(fallback)
    }
    /// See [`Result::unwrap_or_else`].
    fn unwrap_or_else<F: FnOnce(Err) -> Ok>(self, f: F) -> Ok {
        self.into_base().unwrap_or_else(f)
    }
    /// See [`Result::try_unwrap`].
    #[allow(clippy::missing_errors_doc)]
    fn try_unwrap(self) -> core::result::Result<Ok, crate::AccessError> {
        self.into_base().try_unwrap()
    }
    /// See [`Result::unwrap`].
    fn unwrap(self) -> Ok
    where
        Err: core::fmt::Debug,
    {
        self.into_base().unwrap()
    }
    /// See [`Result::unwrap_err`].
    fn unwrap_err(self) -> Err
    where
        Ok: core::fmt::Debug,
    {
        self.into_base().unwrap_err()
    }
}
impl<N: Named<Base = Result<Ok, Err>>, Ok, Err> NamedResult<Ok, Err> for N {}

/// The unit-success operations, available on any name for a [`UnitResult`](crate::UnitResult).
pub trait NamedUnitResult<Err>: Named<Base = Result<Unit, Err>> {
    /// See [`Result::match_success`].
    fn match_success<U, FnOk: FnOnce() -> U, FnErr: FnOnce(Err) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.into_base().match_success(ok, err)
    }
}
impl<N: Named<Base = Result<Unit, Err>>, Err> NamedUnitResult<Err> for N {}

macro_rules! named_union {
    ($(#[$meta: meta])* $trait: ident, $union: ident, $($T: ident $F: ident $Fut: ident $p: ident),+) => {
        $(#[$meta])*
        pub trait $trait<$($T),+>: Named<Base = $union<$($T),+>> {
            #[doc = concat!("See [`", stringify!($union), "::match_owned`].")]
            fn match_owned<U, $($F: FnOnce($T) -> U),+>(self, $($p: $F),+) -> U {
                self.into_base().match_owned($($p),+)
            }
            #[doc = concat!("See [`", stringify!($union), "::into_member`].")]
            #[allow(clippy::missing_errors_doc)]
            fn into_member<T: 'static>(self) -> core::result::Result<T, Self>
            where
                $($T: 'static,)+
            {
                self.into_base().into_member().map_err(Self::from_base)
            }
            #[doc = concat!("See [`", stringify!($union), "::switch_async`].")]
            fn switch_async<$($F, $Fut),+>(self, $($p: $F),+) -> impl Future<Output = ()>
            where
                $($F: FnOnce($T) -> $Fut, $Fut: Future<Output = ()>,)+
            {
                self.into_base().switch_async($($p),+)
            }
        }
        impl<N: Named<Base = $union<$($T),+>>, $($T),+> $trait<$($T),+> for N {}
    };
}

named_union!(
    /// The consuming operations of [`Union2`], available on any name for one.
    NamedUnion2, Union2,
    T0 F0 Fut0 first, T1 F1 Fut1 second
);
named_union!(
    /// The consuming operations of [`Union3`], available on any name for one.
    NamedUnion3, Union3,
    T0 F0 Fut0 first, T1 F1 Fut1 second, T2 F2 Fut2 third
);
named_union!(
    /// The consuming operations of [`Union4`], available on any name for one.
    NamedUnion4, Union4,
    T0 F0 Fut0 first, T1 F1 Fut1 second, T2 F2 Fut2 third, T3 F3 Fut3 fourth
);
named_union!(
    /// The consuming operations of [`Union5`], available on any name for one.
    NamedUnion5, Union5,
    T0 F0 Fut0 first, T1 F1 Fut1 second, T2 F2 Fut2 third, T3 F3 Fut3 fourth, T4 F4 Fut4 fifth
);

#[cfg(test)]
mod tests {
    use super::*;

    struct Parsed(Result<u8, String>);
    impl Named for Parsed {
        type Base = Result<u8, String>;
        fn into_base(self) -> Self::Base {
            self.0
        }
        fn from_base(base: Self::Base) -> Self {
            Self(base)
        }
        fn base(&self) -> &Self::Base {
            &self.0
        }
    }

    struct Shape(Union2<u8, char>);
    impl Named for Shape {
        type Base = Union2<u8, char>;
        fn into_base(self) -> Self::Base {
            self.0
        }
        fn from_base(base: Self::Base) -> Self {
            Self(base)
        }
        fn base(&self) -> &Self::Base {
            &self.0
        }
    }

    #[test]
    fn consuming_operations_forward() {
        assert_eq!(Parsed(Result::Ok(2)).map(|x| x * 2), Result::Ok(4));
        assert_eq!(Parsed(Result::Err("e".into())).into_parts(), (true, 0, "e".into()));
        assert_eq!(Parsed(Result::Ok(1)).unwrap(), 1);
        let shape = Shape(Union2::Second('x'));
        let shape = match shape.into_member::<u8>() {
            Ok(_) => panic!("wrong member"),
            Err(shape) => shape,
        };
        assert_eq!(shape.base().index(), 1);
        assert_eq!(shape.match_owned(|_| 'n', |c| c), 'x');
    }
}
